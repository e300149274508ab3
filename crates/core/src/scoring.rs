//! Scoring module - line clear table plus hard drop bonus
//!
//! Points per lock: 0/100/300/500/800 for 0-4 rows. Counts above four cannot
//! happen with four-cell pieces and award nothing. A hard drop adds two points
//! per row fallen. There is no level multiplier.

use crate::types::{HARD_DROP_POINTS_PER_ROW, LINE_SCORES};

/// Points awarded by one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub line_clear_score: u32,
    pub drop_bonus: u32,
    pub total: u32,
}

/// Points for clearing `lines` rows in a single lock
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Bonus for a hard drop of `steps` rows
pub fn hard_drop_bonus(steps: u32) -> u32 {
    steps.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Combine both sources for one lock event
pub fn calculate_lock_score(lines: usize, hard_drop_steps: u32) -> ScoreResult {
    let line_clear_score = line_clear_points(lines);
    let drop_bonus = hard_drop_bonus(hard_drop_steps);
    ScoreResult {
        line_clear_score,
        drop_bonus,
        total: line_clear_score.saturating_add(drop_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 500);
        assert_eq!(line_clear_points(4), 800);
    }

    #[test]
    fn test_beyond_four_awards_nothing() {
        assert_eq!(line_clear_points(5), 0);
        assert_eq!(line_clear_points(20), 0);
    }

    #[test]
    fn test_hard_drop_bonus() {
        assert_eq!(hard_drop_bonus(0), 0);
        assert_eq!(hard_drop_bonus(5), 10);
        assert_eq!(hard_drop_bonus(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_lock_score_combines() {
        let r = calculate_lock_score(2, 7);
        assert_eq!(r.line_clear_score, 300);
        assert_eq!(r.drop_bonus, 14);
        assert_eq!(r.total, 314);

        assert_eq!(calculate_lock_score(0, 0), ScoreResult::default());
    }
}
