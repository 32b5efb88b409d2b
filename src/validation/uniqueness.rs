//! Uniqueness Check
//!
//! Every interior line must hold distinct heights drawn from 1..=N.

use crate::board::{height, Axis, Board};

use super::report::Violation;

/// First cell along `axis` that is not a valid height or repeats one.
///
/// Lines are scanned in order and each line left to right in its reading
/// direction.
pub fn find_repeated_height(board: &Board, axis: Axis) -> Option<Violation> {
    let n = board.dimension();
    let mut seen = vec![false; n + 1];

    for (line, cells) in (1..).zip(board.lines(axis)) {
        seen.fill(false);
        for (position, ch) in (1..).zip(cells.interior()) {
            let h = match height(ch) {
                Some(h) if (1..=n).contains(&(h as usize)) => h,
                _ => {
                    return Some(Violation::InvalidHeight {
                        axis,
                        line,
                        position,
                        found: ch,
                    });
                }
            };
            if seen[h as usize] {
                return Some(Violation::DuplicateHeight {
                    axis,
                    line,
                    position,
                    height: h,
                });
            }
            seen[h as usize] = true;
        }
    }

    None
}

/// True when every interior row is a set of distinct heights in 1..=N.
pub fn has_unique_rows(board: &Board) -> bool {
    find_repeated_height(board, Axis::Row).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 7]) -> Board {
        Board::from_lines(rows).expect("valid board")
    }

    #[test]
    fn test_unique_rows() {
        let b = board([
            "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(has_unique_rows(&b));
    }

    #[test]
    fn test_repeated_height_in_first_row() {
        let b = board([
            "***21**", "452453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!has_unique_rows(&b));
        assert_eq!(
            find_repeated_height(&b, Axis::Row),
            Some(Violation::DuplicateHeight {
                axis: Axis::Row,
                line: 1,
                position: 4,
                height: 5
            })
        );
    }

    #[test]
    fn test_repeated_height_in_later_row() {
        let b = board([
            "***21**", "412453*", "423145*", "*553215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!has_unique_rows(&b));
    }

    #[test]
    fn test_height_out_of_range() {
        let b = board([
            "***21**", "412463*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert_eq!(
            find_repeated_height(&b, Axis::Row),
            Some(Violation::InvalidHeight {
                axis: Axis::Row,
                line: 1,
                position: 4,
                found: '6'
            })
        );
    }

    #[test]
    fn test_non_digit_cell_fails() {
        let b = board([
            "***21**", "412453*", "4231?5*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!has_unique_rows(&b));
    }

    #[test]
    fn test_columns_checked_separately() {
        let b = board([
            "***21**", "412453*", "423145*", "*543215", "*35214*", "*41232*", "*2*1***",
        ]);
        assert!(!has_unique_rows(&b));

        let b = board([
            "*******", "*12345*", "*12345*", "*12345*", "*12345*", "*12345*", "*******",
        ]);
        assert!(has_unique_rows(&b));
        assert_eq!(
            find_repeated_height(&b, Axis::Column),
            Some(Violation::DuplicateHeight {
                axis: Axis::Column,
                line: 1,
                position: 2,
                height: 1
            })
        );
    }
}
