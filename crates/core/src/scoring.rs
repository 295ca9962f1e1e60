//! Scoring module - clear rewards
//!
//! The table rewards clearing several lines at once super-linearly:
//!
//! | columns | rows | score |
//! |---------|------|-------|
//! | 0 | 0 | 0 |
//! | 1 | 0 (or 0, 1) | random in 51..=149 |
//! | n >= 2 | 0 (or 0, n) | `floor(100 * 1.7^(n-1))` |
//! | c >= 1 | r >= 1 | `100 * c * r` + random in 51..=149 |
//!
//! A single line earns a flat random bonus regardless of how full the board is.

use crate::rng::SimpleRng;
use crate::types::{
    CROSS_CLEAR_BASE, SINGLE_AXIS_SCORES, SINGLE_LINE_BONUS_MAX, SINGLE_LINE_BONUS_MIN,
};

/// Draw the random single-line bonus
pub fn single_line_bonus(rng: &mut SimpleRng) -> u32 {
    rng.next_between(SINGLE_LINE_BONUS_MIN, SINGLE_LINE_BONUS_MAX)
}

/// Score for `n >= 2` lines cleared along one axis only
pub fn single_axis_score(lines: usize) -> u32 {
    SINGLE_AXIS_SCORES
        .get(lines)
        .copied()
        .unwrap_or(SINGLE_AXIS_SCORES[SINGLE_AXIS_SCORES.len() - 1])
}

/// Calculate the score for clearing `columns` full columns and `rows` full rows
///
/// The random bonus is drawn only when the table calls for it, so a seeded RNG
/// advances identically for identical clears.
pub fn calculate_clear_score(columns: usize, rows: usize, rng: &mut SimpleRng) -> u32 {
    match (columns, rows) {
        (0, 0) => 0,
        (1, 0) | (0, 1) => single_line_bonus(rng),
        (0, n) | (n, 0) => single_axis_score(n),
        (c, r) => CROSS_CLEAR_BASE
            .saturating_mul(c as u32)
            .saturating_mul(r as u32)
            .saturating_add(single_line_bonus(rng)),
    }
}
