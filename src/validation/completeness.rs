//! Completeness Check
//!
//! A finished board has no placeholder left in any interior line.

use crate::board::{Axis, Board};

use super::report::Violation;

/// First placeholder in the interior lines along `axis`.
pub fn find_placeholder(board: &Board, axis: Axis) -> Option<Violation> {
    let placeholder = board.placeholder();
    (1..)
        .zip(board.lines(axis))
        .find_map(|(line, cells)| {
            cells
                .chars()
                .position(|ch| ch == placeholder)
                .map(|position| Violation::Unfinished {
                    axis,
                    line,
                    position,
                })
        })
}

/// True when no interior row contains the placeholder.
pub fn is_complete(board: &Board) -> bool {
    find_placeholder(board, Axis::Row).is_none()
}
