//! Skyscrapers Checker
//!
//! Validates a finished skyscrapers puzzle board.
//!
//! This library provides:
//! - A square board model with row and column views
//! - Completeness, uniqueness and visibility checks
//! - A short-circuiting verdict with the first broken rule
//! - Configuration and output for the command-line checker

pub mod board;
pub mod config;
pub mod error;
pub mod output;
pub mod validation;

// Re-exports for clean public API
pub use board::{read_board, Axis, Board, Line, Side};
pub use config::Config;
pub use error::BoardError;
pub use validation::{check_board, check_skyscrapers, explain_board, Verdict, Violation};
