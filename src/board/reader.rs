//! Board Reader
//!
//! Loads a board file: one row per line, frame included.

use std::fs;
use std::path::Path;

use super::grid::{Board, DEFAULT_PLACEHOLDER};
use crate::error::{BoardError, Result};

/// Read a board using the default `'?'` placeholder.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board> {
    read_board_with(path, DEFAULT_PLACEHOLDER)
}

/// Read a board, marking unfilled cells with `placeholder`.
pub fn read_board_with(path: impl AsRef<Path>, placeholder: char) -> Result<Board> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let board = Board::parse(&content)?.with_placeholder(placeholder);
    log::debug!(
        "Read {}x{} board from {}",
        board.size(),
        board.size(),
        path.display()
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_board_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "***21**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***")
            .expect("write board");

        let board = read_board(file.path()).expect("read board");
        assert_eq!(board.dimension(), 5);
        assert_eq!(board.row(3).to_string(), "*543215");
    }

    #[test]
    fn test_custom_placeholder() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "***\n*_*\n***").expect("write board");

        let board = read_board_with(file.path(), '_').expect("read board");
        assert_eq!(board.placeholder(), '_');
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("check.txt");

        match read_board(&missing) {
            Err(BoardError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected io error, got {:?}", other),
        }
    }
}
