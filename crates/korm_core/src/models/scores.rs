//! Weekly score table supplied by the score-acquisition layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{KormError, Result};
use crate::models::team::TeamCode;

/// One score row: `team` scored `score` in `week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub week: u32,
    pub team: TeamCode,
    pub score: f64,
}

/// Ordered `(week, team) -> score` table for one season.
///
/// Construction rejects duplicate `(week, team)` keys; completeness against
/// the active roster is checked week by week inside the strike engine, which
/// is the only place that knows which teams are still active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    weeks: BTreeMap<u32, BTreeMap<TeamCode, f64>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        ScoreTable::default()
    }

    /// Build a table from score rows, rejecting duplicate `(week, team)` keys.
    pub fn from_rows(rows: impl IntoIterator<Item = ScoreRow>) -> Result<Self> {
        let mut table = ScoreTable::new();
        for row in rows {
            table.insert(row.week, row.team, row.score)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, week: u32, team: TeamCode, score: f64) -> Result<()> {
        let week_scores = self.weeks.entry(week).or_default();
        if week_scores.insert(team.clone(), score).is_some() {
            return Err(KormError::DuplicateScore { team, week });
        }
        Ok(())
    }

    /// All scores recorded for `week`, ordered by team code. Empty if the
    /// week has no rows.
    pub fn week(&self, week: u32) -> BTreeMap<TeamCode, f64> {
        self.weeks.get(&week).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
