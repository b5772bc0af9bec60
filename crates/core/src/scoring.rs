//! Scoring module - points per clearing pass
//!
//! One pass is scored once, by the number of rows it removed, no matter
//! whether those rows were adjacent.

use crate::types::LINE_SCORES;

/// Points for a pass that cleared `lines` rows
///
/// Four or more rows all score the top entry.
pub fn line_clear_points(lines: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx]
}
