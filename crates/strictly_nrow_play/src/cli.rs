//! Command-line interface for strictly_nrow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_nrow::{BoardSize, Player};
use strictly_nrow_agent::Difficulty;

/// Strictly N-in-a-row - play tic-tac-toe and its bigger cousins
#[derive(Parser, Debug)]
#[command(name = "strictly_nrow")]
#[command(about = "N-in-a-row against a tiered computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Preferences file (TOML). Defaults apply if it does not exist.
    #[arg(long, global = true, default_value = "nrow.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Board side: 3, 4 or 5
        #[arg(short, long, value_parser = parse_size)]
        size: Option<BoardSize>,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Your mark: X (moves first) or O
        #[arg(short, long, value_parser = parse_mark)]
        mark: Option<Player>,

        /// Rounds to play
        #[arg(short, long, default_value = "1")]
        rounds: u32,

        /// Skip the computer's thinking pause
        #[arg(long)]
        instant: bool,

        /// Seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Watch two computer players
    Watch {
        /// Board side: 3, 4 or 5
        #[arg(short, long, value_parser = parse_size)]
        size: Option<BoardSize>,

        /// Strength of X (defaults to the preferred difficulty)
        #[arg(long)]
        x_difficulty: Option<Difficulty>,

        /// Strength of O (defaults to the preferred difficulty)
        #[arg(long)]
        o_difficulty: Option<Difficulty>,

        /// Rounds to play
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Print every board, not just results
        #[arg(long)]
        boards: bool,

        /// Skip the thinking pause
        #[arg(long)]
        instant: bool,

        /// Seed for reproducible play
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_size(s: &str) -> Result<BoardSize, String> {
    let side: usize = s.trim().parse().map_err(|e| format!("{e}"))?;
    BoardSize::try_from(side).map_err(|e| e.to_string())
}

fn parse_mark(s: &str) -> Result<Player, String> {
    let mut chars = s.trim().chars();
    match (chars.next().map(|c| c.to_ascii_uppercase()), chars.next()) {
        (Some(c), None) => Player::from_symbol(c).ok_or_else(|| format!("Unknown mark '{s}'")),
        _ => Err(format!("Unknown mark '{s}'")),
    }
}
