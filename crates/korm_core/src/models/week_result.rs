//! Per-week output of the strike engine.

use serde::{Deserialize, Serialize};

use crate::models::team::{TeamCode, TeamStatus};

/// Strikes issued per week, decided by the active-team count entering the
/// week: 5 or more teams play under `TwoStrike`, 4 or fewer under `OneStrike`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeMode {
    #[serde(rename = "2-strike")]
    TwoStrike,
    #[serde(rename = "1-strike")]
    OneStrike,
}

impl StrikeMode {
    /// Mode for a week entered with `active_count` teams. Evaluated fresh
    /// each week; eliminations during the week never change the mode
    /// mid-week.
    pub fn for_active_count(active_count: usize) -> Self {
        if active_count >= 5 {
            StrikeMode::TwoStrike
        } else {
            StrikeMode::OneStrike
        }
    }

    /// Nominal strike threshold rank (1-indexed, ascending score).
    pub fn strike_rank(&self) -> usize {
        match self {
            StrikeMode::TwoStrike => 2,
            StrikeMode::OneStrike => 1,
        }
    }
}

/// One line of a week's ranking table, ordered by descending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScore {
    pub team: TeamCode,
    pub score: f64,
    /// Status after this week's strikes were applied.
    pub status: TeamStatus,
}

/// The complete, auditable record of one processed week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekResult {
    pub week: u32,
    /// Active-team count entering the week (the mode input).
    pub active_entering: usize,
    pub strike_mode: StrikeMode,
    /// Every active team's score, descending. Ties share the score value;
    /// order within a tie is by team code.
    pub ranking: Vec<RankedScore>,
    /// Teams struck this week, ascending by score.
    pub struck: Vec<TeamCode>,
    /// Teams whose second strike landed this week.
    pub eliminated: Vec<TeamCode>,
    /// Active-team count after this week's eliminations.
    pub active_remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_boundary_sits_between_four_and_five() {
        assert_eq!(StrikeMode::for_active_count(12), StrikeMode::TwoStrike);
        assert_eq!(StrikeMode::for_active_count(5), StrikeMode::TwoStrike);
        assert_eq!(StrikeMode::for_active_count(4), StrikeMode::OneStrike);
        assert_eq!(StrikeMode::for_active_count(2), StrikeMode::OneStrike);
    }

    #[test]
    fn strike_rank_matches_mode() {
        assert_eq!(StrikeMode::TwoStrike.strike_rank(), 2);
        assert_eq!(StrikeMode::OneStrike.strike_rank(), 1);
    }

    #[test]
    fn strike_mode_serializes_with_historical_labels() {
        assert_eq!(
            serde_json::to_string(&StrikeMode::TwoStrike).unwrap(),
            "\"2-strike\""
        );
        assert_eq!(
            serde_json::to_string(&StrikeMode::OneStrike).unwrap(),
            "\"1-strike\""
        );
    }
}
