//! Season configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{KormError, Result};
use crate::models::team::TeamCode;

/// Immutable configuration for one KORM season.
///
/// `pool` is conventionally `entry_fee * roster.len()`; the engine does not
/// enforce the product, only that both amounts are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Entry fee per team, whole currency units.
    pub entry_fee: u32,
    /// Total prize pool, whole currency units.
    pub pool: u32,
    /// First week of the KORM window (inclusive).
    pub first_week: u32,
    /// Last week of the KORM window (inclusive).
    pub last_week: u32,
    /// Teams competing at week 1.
    pub roster: Vec<TeamCode>,
}

impl SeasonConfig {
    /// Reject impossible configurations before any replay begins.
    pub fn validate(&self) -> Result<()> {
        if self.roster.len() < 2 {
            return Err(KormError::InvalidConfig(format!(
                "roster needs at least 2 teams, got {}",
                self.roster.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for team in &self.roster {
            if team.is_empty() {
                return Err(KormError::InvalidConfig("empty team code in roster".into()));
            }
            if !seen.insert(team.as_str()) {
                return Err(KormError::InvalidConfig(format!(
                    "duplicate team code {team} in roster"
                )));
            }
        }
        if self.first_week == 0 {
            return Err(KormError::InvalidConfig("first_week must be >= 1".into()));
        }
        if self.last_week < self.first_week {
            return Err(KormError::InvalidConfig(format!(
                "last_week {} precedes first_week {}",
                self.last_week, self.first_week
            )));
        }
        if self.pool == 0 {
            return Err(KormError::InvalidConfig("pool must be positive".into()));
        }
        if self.entry_fee == 0 {
            return Err(KormError::InvalidConfig("entry_fee must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(roster: &[&str]) -> SeasonConfig {
        SeasonConfig {
            entry_fee: 100,
            pool: 1200,
            first_week: 1,
            last_week: 14,
            roster: roster.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config(&["A", "B", "C"]).validate().is_ok());
    }

    #[test]
    fn rejects_empty_roster() {
        assert!(matches!(
            config(&[]).validate(),
            Err(KormError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_single_team_roster() {
        assert!(config(&["A"]).validate().is_err());
    }

    #[test]
    fn rejects_duplicate_team_codes() {
        assert!(config(&["A", "B", "A"]).validate().is_err());
    }

    #[test]
    fn rejects_inverted_window() {
        let mut cfg = config(&["A", "B"]);
        cfg.first_week = 5;
        cfg.last_week = 3;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_pool() {
        let mut cfg = config(&["A", "B"]);
        cfg.pool = 0;
        assert!(cfg.validate().is_err());
    }
}
