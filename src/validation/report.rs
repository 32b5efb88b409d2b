//! Verdicts and Violations
//!
//! A failed check names the first rule it found broken and where.

use std::fmt;

use serde::Serialize;

use crate::board::{Axis, Side};

/// The first broken rule found on a board.
///
/// `line` is the index of the row or column within the full board and
/// `position` is the cell offset along that line, frame cells included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// An interior line still holds the placeholder.
    Unfinished {
        axis: Axis,
        line: usize,
        position: usize,
    },
    /// An interior cell that is not a height in 1..=N.
    InvalidHeight {
        axis: Axis,
        line: usize,
        position: usize,
        found: char,
    },
    /// A height seen earlier in the same line.
    DuplicateHeight {
        axis: Axis,
        line: usize,
        position: usize,
        height: u8,
    },
    /// A hint that disagrees with the number of visible buildings.
    VisibilityMismatch {
        axis: Axis,
        line: usize,
        side: Side,
        expected: u8,
        visible: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unfinished {
                axis,
                line,
                position,
            } => write!(f, "{axis} {line} is unfinished at position {position}"),
            Violation::InvalidHeight {
                axis,
                line,
                position,
                found,
            } => write!(
                f,
                "{axis} {line} has invalid height '{found}' at position {position}"
            ),
            Violation::DuplicateHeight {
                axis,
                line,
                position,
                height,
            } => write!(
                f,
                "{axis} {line} repeats height {height} at position {position}"
            ),
            Violation::VisibilityMismatch {
                axis,
                line,
                side,
                expected,
                visible,
            } => write!(
                f,
                "{axis} {line} {} hint is {expected} but {visible} buildings are visible",
                side.edge_name(*axis)
            ),
        }
    }
}

/// Outcome of validating a whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub violation: Option<Violation>,
}

impl Verdict {
    pub fn from_violation(violation: Option<Violation>) -> Self {
        Self {
            valid: violation.is_none(),
            violation,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.valid)
    }
}
