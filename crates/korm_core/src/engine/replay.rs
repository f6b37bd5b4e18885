//! Season replay: drives the strike engine across the KORM window.
//!
//! Historical standings "as of week W" are the same replay truncated at W.
//! One code path means a reconstruction is always identical to the matching
//! prefix of the full replay.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::strike::apply_week;
use crate::error::Result;
use crate::models::{ScoreTable, SeasonConfig, TeamCode, TeamState, TerminationReason, WeekResult};

/// Product of one replay pass: the per-week records, the terminal team
/// states, and how (or whether) the season was decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReplay {
    pub weeks: Vec<WeekResult>,
    pub teams: BTreeMap<TeamCode, TeamState>,
    /// `None` when the replay was truncated by `stop_at_week` before either
    /// terminus; such a replay is a standings snapshot, not a decided season.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<TerminationReason>,
}

impl SeasonReplay {
    /// Last week actually processed.
    pub fn final_week(&self) -> Option<u32> {
        self.weeks.last().map(|w| w.week)
    }

    pub fn is_decided(&self) -> bool {
        self.termination.is_some()
    }

    /// Teams still active after the last processed week, ordered by code.
    pub fn active_teams(&self) -> Vec<&TeamState> {
        self.teams.values().filter(|s| s.is_active()).collect()
    }
}

/// Replay a season from `config.first_week` through `config.last_week`, or
/// through `stop_at_week` if that comes first.
///
/// Stops early the moment exactly one team remains active (Last Team
/// Standing). Any input-integrity problem aborts the whole replay; there is
/// no partial output.
pub fn replay(
    config: &SeasonConfig,
    table: &ScoreTable,
    stop_at_week: Option<u32>,
) -> Result<SeasonReplay> {
    config.validate()?;

    let mut teams: BTreeMap<TeamCode, TeamState> = config
        .roster
        .iter()
        .map(|code| (code.clone(), TeamState::new(code.clone())))
        .collect();

    let end_week = stop_at_week
        .map(|w| w.min(config.last_week))
        .unwrap_or(config.last_week);

    let mut weeks: Vec<WeekResult> = Vec::new();
    let mut termination: Option<TerminationReason> = None;

    for week in config.first_week..=end_week {
        let scores = table.week(week);
        let result = apply_week(&mut teams, &scores, week)?;
        let active_remaining = result.active_remaining;
        weeks.push(result);

        if active_remaining <= 1 {
            log::info!("week {week}: last team standing, replay stops early");
            termination = Some(TerminationReason::LastTeamStanding);
            break;
        }
    }

    if termination.is_none() && end_week == config.last_week {
        log::info!(
            "window closed at week {} with {} teams active",
            config.last_week,
            teams.values().filter(|s| s.is_active()).count()
        );
        termination = Some(TerminationReason::WindowClosed);
    }

    Ok(SeasonReplay { weeks, teams, termination })
}
