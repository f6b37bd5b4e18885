//! Final placement and payout structures.

use serde::{Deserialize, Serialize};

use crate::models::team::{TeamCode, TeamStatus};

/// Why a season's replay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Exactly one active team remained before the window closed.
    LastTeamStanding,
    /// The window's last week was processed with 2+ teams still active.
    WindowClosed,
}

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// 1-based finishing position.
    pub place: usize,
    pub team: TeamCode,
    pub strikes: usize,
    pub strike_weeks: Vec<u32>,
    pub status: TeamStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elimination_week: Option<u32>,
    /// Prize in whole currency units; 0 for place 4 and below.
    pub payout: u32,
}

/// Terminal result of a decided season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonOutcome {
    pub champion: TeamCode,
    /// All teams in descending order of finish.
    pub placements: Vec<Placement>,
    /// Last week actually processed.
    pub final_week: u32,
    pub termination: TerminationReason,
}
