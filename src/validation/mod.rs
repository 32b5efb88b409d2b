//! Validation
//!
//! Rule checks for a filled-in skyscrapers board.

pub mod completeness;
pub mod engine;
pub mod report;
pub mod uniqueness;
pub mod visibility;

pub use completeness::is_complete;
pub use engine::{
    check_board, check_columns, check_horizontal_visibility, check_skyscrapers, explain_board,
};
pub use report::{Verdict, Violation};
pub use uniqueness::has_unique_rows;
pub use visibility::{check_visibility, count_visible};
