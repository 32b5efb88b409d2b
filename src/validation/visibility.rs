//! Visibility Check
//!
//! Counts the buildings seen looking into a line from its leading end. A
//! building is visible when it is strictly taller than everything before it.

use crate::board::{height, Line};

/// Number of visible buildings in a sequence of heights.
///
/// The first building is always visible. Ties neither count nor raise the
/// running maximum.
pub fn count_visible(heights: impl IntoIterator<Item = u8>) -> usize {
    let mut heights = heights.into_iter();
    let Some(mut last_seen) = heights.next() else {
        return 0;
    };

    let mut seen = 1;
    for h in heights {
        if h > last_seen {
            seen += 1;
            last_seen = h;
        }
    }
    seen
}

/// Buildings visible from the leading frame cell of `line`.
///
/// Interior cells without a height count as ground level.
pub fn visible_from_start(line: Line<'_>) -> usize {
    count_visible(line.interior().map(|ch| height(ch).unwrap_or(0)))
}

/// True when exactly `pivot` buildings are visible from the leading end.
///
/// Heights are assumed to be distinct already; this does not check that
/// the line is a permutation.
pub fn check_visibility(line: Line<'_>, pivot: u8) -> bool {
    visible_from_start(line) == pivot as usize
}
