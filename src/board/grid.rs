//! Board Grid
//!
//! Square board stored row-major, with row and column views over the same
//! cells. Columns are strided views, so validating them never copies the
//! board.

use std::fmt;

use serde::Serialize;

use crate::error::{BoardError, Result};

/// Marker for an unfilled interior cell unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: char = '?';

/// Orientation of a line through the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Which end of a line a hint sits on.
///
/// For rows `Start` is the left edge, for columns it is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

impl Side {
    /// Human name of this side for the given axis.
    pub fn edge_name(self, axis: Axis) -> &'static str {
        match (axis, self) {
            (Axis::Row, Side::Start) => "left",
            (Axis::Row, Side::End) => "right",
            (Axis::Column, Side::Start) => "top",
            (Axis::Column, Side::End) => "bottom",
        }
    }
}

fn digit_value(ch: char) -> Option<u8> {
    ch.to_digit(10).map(|d| d as u8)
}

/// Numeric building height of a cell, if the cell holds a digit.
pub fn height(ch: char) -> Option<u8> {
    digit_value(ch)
}

/// Parse a frame cell into a hint.
///
/// `None` means the side is unconstrained. A `'0'` hint parses as `Some(0)`
/// and can never be satisfied by a non-empty line.
pub fn parse_hint(ch: char) -> Option<u8> {
    digit_value(ch)
}

/// A row or column of the board, frame cells included.
///
/// Lines are cheap copyable views: a start offset and a stride into a
/// shared slice of cells, optionally read back to front.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    cells: &'a [char],
    start: usize,
    stride: usize,
    len: usize,
    reversed: bool,
}

impl<'a> Line<'a> {
    /// A line over a plain run of characters, e.g. a single text row.
    pub fn new(cells: &'a [char]) -> Self {
        Self::strided(cells, 0, 1, cells.len())
    }

    fn strided(cells: &'a [char], start: usize, stride: usize, len: usize) -> Self {
        Self {
            cells,
            start,
            stride,
            len,
            reversed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character at position `k`, counted in reading direction.
    pub fn get(&self, k: usize) -> Option<char> {
        if k >= self.len {
            return None;
        }
        let k = if self.reversed { self.len - 1 - k } else { k };
        self.cells.get(self.start + k * self.stride).copied()
    }

    /// All characters in reading direction.
    pub fn chars(self) -> impl Iterator<Item = char> + 'a {
        (0..self.len).filter_map(move |k| self.get(k))
    }

    /// Characters between the two frame cells.
    pub fn interior(self) -> impl Iterator<Item = char> + 'a {
        (1..self.len.saturating_sub(1)).filter_map(move |k| self.get(k))
    }

    /// The same line read from the opposite end.
    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..*self
        }
    }

    /// Hint on the frame cell the line is read from.
    pub fn leading_hint(&self) -> Option<u8> {
        self.get(0).and_then(parse_hint)
    }

    /// Hint on the frame cell the line is read towards.
    pub fn trailing_hint(&self) -> Option<u8> {
        self.len
            .checked_sub(1)
            .and_then(|last| self.get(last))
            .and_then(parse_hint)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars().any(|c| c == ch)
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// A skyscrapers board: an N x N interior surrounded by a hint frame.
///
/// Construction guarantees the grid is square and at least 3 x 3, so row
/// and column views are always in bounds and have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<char>,
    size: usize,
    placeholder: char,
}

impl Board {
    /// Build a board from its text rows, frame included.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut rows = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(BoardError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            cells.extend(line.chars());
            rows += 1;
        }

        let width = width.ok_or(BoardError::Empty)?;
        if rows != width {
            return Err(BoardError::NotSquare { rows, width });
        }
        if rows < 3 {
            return Err(BoardError::TooSmall { size: rows });
        }

        Ok(Self {
            cells,
            size: rows,
            placeholder: DEFAULT_PLACEHOLDER,
        })
    }

    /// Parse a board from text, one row per line.
    ///
    /// Surrounding whitespace is stripped from every line and blank lines
    /// are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Use a different character as the unfilled-cell marker.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Side length including the frame (N + 2).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of the interior (N), which is also the tallest height.
    pub fn dimension(&self) -> usize {
        self.size - 2
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Row `i`, read left to right.
    ///
    /// # Panics
    /// Panics if `i >= size`.
    pub fn row(&self, i: usize) -> Line<'_> {
        assert!(i < self.size, "row index out of bounds");
        Line::strided(&self.cells, i * self.size, 1, self.size)
    }

    /// Column `j`, read top to bottom.
    ///
    /// # Panics
    /// Panics if `j >= size`.
    pub fn column(&self, j: usize) -> Line<'_> {
        assert!(j < self.size, "column index out of bounds");
        Line::strided(&self.cells, j, self.size, self.size)
    }

    pub fn line(&self, axis: Axis, index: usize) -> Line<'_> {
        match axis {
            Axis::Row => self.row(index),
            Axis::Column => self.column(index),
        }
    }

    /// Interior lines (indices 1..=N) along `axis`, frame cells included.
    pub fn lines(&self, axis: Axis) -> impl Iterator<Item = Line<'_>> {
        (1..self.size - 1).map(move |i| self.line(axis, i))
    }

    pub fn rows(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines(Axis::Row)
    }

    pub fn columns(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines(Axis::Column)
    }

    /// A new board whose rows are this board's columns.
    pub fn transpose(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|j| self.column(j).chars())
            .collect();
        Self {
            cells,
            size: self.size,
            placeholder: self.placeholder,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            writeln!(f, "{}", self.row(i))?;
        }
        Ok(())
    }
}
