//! Convergence trimming
//!
//! Once both branches stop differing, older history is identical on both
//! sides and only adds noise. This stage cuts both columns just past the
//! oldest difference.

use super::Column;
use super::constants::CONTEXT_ROWS;
use crate::model::ColorMap;

/// Row count to keep on both sides.
///
/// A side without any difference contributes its full length, so it is never
/// cut short.
pub fn convergence_cutoff(left: &ColorMap, right: &ColorMap) -> usize {
    let last_difference = |map: &ColorMap| map.last_difference().unwrap_or(map.row_count() - 1);
    last_difference(left).max(last_difference(right)) + CONTEXT_ROWS
}

/// Truncate both columns at their convergence cutoff; returns the cutoff
pub fn converge(left: &mut Column, right: &mut Column) -> usize {
    let cutoff = convergence_cutoff(&left.colors, &right.colors);
    left.truncate(cutoff);
    right.truncate(cutoff);
    cutoff
}
