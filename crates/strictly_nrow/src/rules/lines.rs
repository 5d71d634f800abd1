//! Enumeration of the lines considered for wins and heuristics.

use crate::{BoardSize, LineKind, Position};

const ACROSS: (isize, isize) = (0, 1);
const DOWN: (isize, isize) = (1, 0);
const DOWN_RIGHT: (isize, isize) = (1, 1);
const DOWN_LEFT: (isize, isize) = (1, -1);

/// A straight line across the board, from a start cell to the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// First cell of the line.
    pub start: Position,
    /// Row/column increment per step.
    pub step: (isize, isize),
    /// Orientation.
    pub kind: LineKind,
}

impl Line {
    /// Walks the line from its start until it leaves the grid.
    pub fn cells(self, side: usize) -> impl Iterator<Item = Position> {
        std::iter::successors(Some(self.start), move |pos| pos.step(self.step, side))
    }
}

/// Every line that can hold a winning run, in scan order.
///
/// Rows top to bottom, columns left to right, then for each offset up to
/// `side - win_length` the main-diagonal starts (top edge, then left edge),
/// then for each offset the anti-diagonal starts (top edge, then right edge).
/// Diagonals shorter than the win length are never produced.
pub fn scan_lines(size: BoardSize) -> impl Iterator<Item = Line> {
    let side = size.side();
    let last = side - 1;
    let offsets = 0..=side - size.win_length();

    let rows = (0..side).map(|row| Line {
        start: Position::new(row, 0),
        step: ACROSS,
        kind: LineKind::Row,
    });

    let columns = (0..side).map(|col| Line {
        start: Position::new(0, col),
        step: DOWN,
        kind: LineKind::Column,
    });

    let main = offsets.clone().flat_map(|offset| {
        std::iter::once(diagonal(Position::new(0, offset), DOWN_RIGHT))
            .chain((offset > 0).then(|| diagonal(Position::new(offset, 0), DOWN_RIGHT)))
    });

    let anti = offsets.flat_map(move |offset| {
        std::iter::once(diagonal(Position::new(0, last - offset), DOWN_LEFT))
            .chain((offset > 0).then(|| diagonal(Position::new(offset, last), DOWN_LEFT)))
    });

    rows.chain(columns).chain(main).chain(anti)
}

fn diagonal(start: Position, step: (isize, isize)) -> Line {
    Line {
        start,
        step,
        kind: LineKind::Diagonal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three_has_eight_lines() {
        let lines: Vec<_> = scan_lines(BoardSize::Three).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[6].start, Position::new(0, 0));
        assert_eq!(lines[7].start, Position::new(0, 2));
    }

    #[test]
    fn test_five_by_five_diagonal_order() {
        let diagonals: Vec<_> = scan_lines(BoardSize::Five)
            .filter(|l| l.kind == LineKind::Diagonal)
            .map(|l| (l.start, l.step))
            .collect();

        assert_eq!(
            diagonals,
            vec![
                (Position::new(0, 0), DOWN_RIGHT),
                (Position::new(0, 1), DOWN_RIGHT),
                (Position::new(1, 0), DOWN_RIGHT),
                (Position::new(0, 4), DOWN_LEFT),
                (Position::new(0, 3), DOWN_LEFT),
                (Position::new(1, 4), DOWN_LEFT),
            ]
        );
    }

    #[test]
    fn test_line_walk_stops_at_edge() {
        let line = diagonal(Position::new(1, 4), DOWN_LEFT);
        let cells: Vec<_> = line.cells(5).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.last(), Some(&Position::new(4, 1)));
    }
}
