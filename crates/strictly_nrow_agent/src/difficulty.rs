//! Difficulty tiers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Strength tier of the agent.
///
/// Parsed case-insensitively (`"hard"`, `"Hard"`), displayed lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Coin flip between tactics and a random cell.
    Easy,
    /// Win, block, then a fixed strategic preference.
    #[default]
    Medium,
    /// Win, block, then bounded minimax.
    Hard,
}

impl Difficulty {
    /// Shortest and longest simulated thinking pause, in milliseconds.
    pub fn thinking_bounds_ms(self) -> (u64, u64) {
        match self {
            Difficulty::Easy => (300, 800),
            Difficulty::Medium => (500, 1200),
            Difficulty::Hard => (800, 1800),
        }
    }

    /// Thinking pause for a uniform draw `fraction` in `[0, 1)`.
    pub fn thinking_delay(self, fraction: f64) -> Duration {
        let (min, max) = self.thinking_bounds_ms();
        let span = (max - min) as f64 * fraction.clamp(0.0, 1.0);
        Duration::from_millis(min) + Duration::from_secs_f64(span / 1000.0)
    }
}

/// Whether the agent pauses before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingPace {
    /// Pause for a tier-dependent random duration.
    #[default]
    Natural,
    /// Answer immediately.
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Easy));
        assert!(Difficulty::from_str("nightmare").is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_delay_stays_in_bounds() {
        for tier in Difficulty::iter() {
            let (min, max) = tier.thinking_bounds_ms();
            assert_eq!(tier.thinking_delay(0.0), Duration::from_millis(min));
            assert!(tier.thinking_delay(0.999_999) < Duration::from_millis(max));
        }
    }
}
