//! Board Model
//!
//! The square grid with its hint frame, and reading it from disk.

pub mod grid;
pub mod reader;

pub use grid::{height, parse_hint, Axis, Board, Line, Side, DEFAULT_PLACEHOLDER};
pub use reader::{read_board, read_board_with};
