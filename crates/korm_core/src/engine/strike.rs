//! Single-week strike assignment.
//!
//! `apply_week` is the heart of the competition: given the mutable team-state
//! map and one week's scores, it decides the strike mode, assigns strikes to
//! the bottom scorers (ties included), records eliminations, and returns the
//! full auditable record of the week. No I/O, no ambient state.

use std::collections::BTreeMap;

use crate::error::{KormError, Result};
use crate::models::{RankedScore, StrikeMode, TeamCode, TeamState, WeekResult};

/// Process one week of the KORM competition.
///
/// `scores` must contain exactly one entry per team still active in
/// `states`. A missing score for an active team or a score for a
/// non-active team is a hard error; no partial `WeekResult` is produced.
pub fn apply_week(
    states: &mut BTreeMap<TeamCode, TeamState>,
    scores: &BTreeMap<TeamCode, f64>,
    week: u32,
) -> Result<WeekResult> {
    let active: Vec<TeamCode> = states
        .values()
        .filter(|s| s.is_active())
        .map(|s| s.team.clone())
        .collect();
    let active_entering = active.len();

    for team in &active {
        if !scores.contains_key(team) {
            return Err(KormError::MissingScore { team: team.clone(), week });
        }
    }
    for team in scores.keys() {
        if !states.get(team).map(|s| s.is_active()).unwrap_or(false) {
            return Err(KormError::UnexpectedScore { team: team.clone(), week });
        }
    }

    // Mode is fixed by the count entering the week; eliminations below never
    // change it mid-week.
    let mode = StrikeMode::for_active_count(active_entering);

    // Ascending by score; ties ordered by team code for determinism.
    let mut ascending: Vec<(TeamCode, f64)> =
        scores.iter().map(|(t, &s)| (t.clone(), s)).collect();
    ascending.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    // Threshold score at the mode's strike rank; every team at or below it is
    // struck, so ties can push the struck count past the nominal figure.
    let struck: Vec<TeamCode> = if ascending.is_empty() {
        Vec::new()
    } else {
        let threshold_idx = mode.strike_rank().min(ascending.len()) - 1;
        let threshold = ascending[threshold_idx].1;
        ascending
            .iter()
            .filter(|(_, score)| *score <= threshold)
            .map(|(team, _)| team.clone())
            .collect()
    };

    let mut eliminated = Vec::new();
    for team in &struck {
        let state = states.get_mut(team).ok_or_else(|| {
            KormError::InvariantViolation(format!("struck team {team} has no state"))
        })?;
        state.record_strike(week, scores[team])?;
        if !state.is_active() {
            eliminated.push(team.clone());
        }
    }

    // Descending for the ranking table; ties ordered by team code.
    let mut ranking: Vec<RankedScore> = ascending
        .iter()
        .map(|(team, score)| RankedScore {
            team: team.clone(),
            score: *score,
            status: states[team].status,
        })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.team.cmp(&b.team)));

    let active_remaining = states.values().filter(|s| s.is_active()).count();

    log::debug!(
        "week {week}: {active_entering} active, {mode:?}, struck {struck:?}, eliminated {eliminated:?}"
    );

    Ok(WeekResult {
        week,
        active_entering,
        strike_mode: mode,
        ranking,
        struck,
        eliminated,
        active_remaining,
    })
}
