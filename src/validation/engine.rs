//! Validation Engine
//!
//! Composes the leaf checks into the row, column and whole-board verdicts.
//! Every stage short-circuits: the first broken rule ends the evaluation.

use std::path::Path;

use crate::board::{read_board, Axis, Board, Side};
use crate::error::Result;

use super::completeness::find_placeholder;
use super::report::{Verdict, Violation};
use super::uniqueness::find_repeated_height;
use super::visibility::visible_from_start;

/// First hint along `axis` that disagrees with its line.
///
/// The start hint of a line is checked before its end hint. Frame cells
/// without a digit impose no constraint.
fn find_hint_mismatch(board: &Board, axis: Axis) -> Option<Violation> {
    for (line, cells) in (1..).zip(board.lines(axis)) {
        log::trace!("Checking hints of {} {}: {}", axis, line, cells);
        for (side, view) in [(Side::Start, cells), (Side::End, cells.reversed())] {
            let Some(expected) = view.leading_hint() else {
                continue;
            };
            let visible = visible_from_start(view);
            if visible != expected as usize {
                return Some(Violation::VisibilityMismatch {
                    axis,
                    line,
                    side,
                    expected,
                    visible,
                });
            }
        }
    }
    None
}

/// Completeness, uniqueness and visibility along one axis.
fn find_line_violation(board: &Board, axis: Axis) -> Option<Violation> {
    log::debug!("Validating {}s", axis);
    find_placeholder(board, axis)
        .or_else(|| find_repeated_height(board, axis))
        .or_else(|| find_hint_mismatch(board, axis))
}

fn find_board_violation(board: &Board) -> Option<Violation> {
    find_placeholder(board, Axis::Row)
        .or_else(|| find_line_violation(board, Axis::Row))
        .or_else(|| find_line_violation(board, Axis::Column))
}

/// Row-wise validation: the board is finished, every row holds distinct
/// heights, and every left and right hint matches its row.
pub fn check_horizontal_visibility(board: &Board) -> bool {
    find_line_violation(board, Axis::Row).is_none()
}

/// Column-wise validation, the same rules as for rows read top to bottom
/// and bottom to top.
pub fn check_columns(board: &Board) -> bool {
    find_line_violation(board, Axis::Column).is_none()
}

/// Full board verdict as a boolean.
pub fn check_board(board: &Board) -> bool {
    find_board_violation(board).is_none()
}

/// Full board verdict along with the first violation found.
pub fn explain_board(board: &Board) -> Verdict {
    let violation = find_board_violation(board);
    match &violation {
        Some(v) => log::debug!("Board rejected: {}", v),
        None => log::debug!("Board accepted"),
    }
    Verdict::from_violation(violation)
}

/// Read the board at `path` and validate it.
pub fn check_skyscrapers(path: impl AsRef<Path>) -> Result<bool> {
    let board = read_board(path)?;
    Ok(check_board(&board))
}
