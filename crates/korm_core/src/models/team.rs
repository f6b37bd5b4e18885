//! Team identity and per-team competition state.

use serde::{Deserialize, Serialize};

use crate::error::{KormError, Result};

/// Opaque team identifier, unique within a season (e.g. "GFM", "WZRD").
pub type TeamCode = String;

/// A single strike event: the week it was incurred and the score that
/// earned it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    pub week: u32,
    pub score: f64,
}

/// Lifecycle status of a team within the KORM competition.
///
/// `OnNotice` is bookkeeping for "exactly one strike"; for every engine
/// decision an on-notice team is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    Active,
    OnNotice,
    Eliminated,
}

impl TeamStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, TeamStatus::Eliminated)
    }
}

/// Mutable per-team state threaded through a season replay.
///
/// Created at season start as `Active` with zero strikes, mutated only at
/// week boundaries, terminal once `Eliminated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub team: TeamCode,
    pub strikes: Vec<Strike>,
    pub status: TeamStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elimination_week: Option<u32>,
}

impl TeamState {
    pub fn new(team: impl Into<TeamCode>) -> Self {
        TeamState {
            team: team.into(),
            strikes: Vec::new(),
            status: TeamStatus::Active,
            elimination_week: None,
        }
    }

    pub fn strike_count(&self) -> usize {
        self.strikes.len()
    }

    /// Weeks in which this team was struck, in order of occurrence.
    pub fn strike_weeks(&self) -> Vec<u32> {
        self.strikes.iter().map(|s| s.week).collect()
    }

    /// Week of the first strike, if any. Later is better for placement.
    pub fn first_strike_week(&self) -> Option<u32> {
        self.strikes.first().map(|s| s.week)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Record a strike for `week`. The second strike eliminates the team;
    /// a third strike cannot happen through the replay loop and is reported
    /// as an engine bug rather than clamped.
    pub fn record_strike(&mut self, week: u32, score: f64) -> Result<()> {
        if self.status == TeamStatus::Eliminated {
            return Err(KormError::InvariantViolation(format!(
                "team {} struck in week {} after elimination in week {:?}",
                self.team, week, self.elimination_week
            )));
        }
        self.strikes.push(Strike { week, score });
        match self.strikes.len() {
            1 => self.status = TeamStatus::OnNotice,
            2 => {
                self.status = TeamStatus::Eliminated;
                self.elimination_week = Some(week);
            }
            n => {
                return Err(KormError::InvariantViolation(format!(
                    "team {} reached {} strikes in week {}",
                    self.team, n, week
                )))
            }
        }
        Ok(())
    }
}
