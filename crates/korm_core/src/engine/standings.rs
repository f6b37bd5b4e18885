//! Final placement and payout assignment for a decided season.

use std::cmp::Reverse;

use crate::engine::replay::SeasonReplay;
use crate::error::{KormError, Result};
use crate::models::{Placement, SeasonConfig, SeasonOutcome, TeamState};

/// Prize shares for places 1-3. Each share is rounded to the nearest whole
/// currency unit independently; the historical pools ($1,200 and $480) both
/// split with no remainder.
const PAYOUT_SHARES: [f64; 3] = [0.667, 0.25, 0.083];

fn payout_for_place(place: usize, pool: u32) -> u32 {
    PAYOUT_SHARES
        .get(place - 1)
        .map(|share| (f64::from(pool) * share).round() as u32)
        .unwrap_or(0)
}

/// Survivors rank by fewest strikes, then by later first strike, then by
/// team code. A clean team has no first-strike week and sorts ahead of any
/// struck team via the strike-count key.
fn survivor_key(state: &TeamState) -> (usize, Reverse<u32>, &str) {
    (
        state.strike_count(),
        Reverse(state.first_strike_week().unwrap_or(u32::MAX)),
        state.team.as_str(),
    )
}

/// Eliminated teams rank by later elimination week, then by later first
/// strike (the team that stayed clean longer), then by team code.
fn eliminated_key(state: &TeamState) -> (Reverse<u32>, Reverse<u32>, &str) {
    (
        Reverse(state.elimination_week.unwrap_or(0)),
        Reverse(state.first_strike_week().unwrap_or(0)),
        state.team.as_str(),
    )
}

/// Rank every team of a decided season and attach prizes.
///
/// Fails with `SeasonUndecided` for a replay truncated by `stop_at_week`
/// before a terminus; standings snapshots have no placements or payouts.
pub fn finalize(replay: &SeasonReplay, config: &SeasonConfig) -> Result<SeasonOutcome> {
    let termination = replay.termination.ok_or(KormError::SeasonUndecided)?;
    let final_week = replay.final_week().ok_or_else(|| {
        KormError::InvariantViolation("decided season with no processed weeks".into())
    })?;

    let mut survivors: Vec<&TeamState> =
        replay.teams.values().filter(|s| s.is_active()).collect();
    survivors.sort_by(|a, b| survivor_key(a).cmp(&survivor_key(b)));

    let mut eliminated: Vec<&TeamState> =
        replay.teams.values().filter(|s| !s.is_active()).collect();
    eliminated.sort_by(|a, b| eliminated_key(a).cmp(&eliminated_key(b)));

    let placements: Vec<Placement> = survivors
        .iter()
        .chain(eliminated.iter())
        .enumerate()
        .map(|(idx, state)| {
            let place = idx + 1;
            Placement {
                place,
                team: state.team.clone(),
                strikes: state.strike_count(),
                strike_weeks: state.strike_weeks(),
                status: state.status,
                elimination_week: state.elimination_week,
                payout: payout_for_place(place, config.pool),
            }
        })
        .collect();

    let champion = placements
        .first()
        .map(|p| p.team.clone())
        .ok_or_else(|| KormError::InvariantViolation("season with no teams".into()))?;

    log::info!("season decided at week {final_week}: champion {champion}");

    Ok(SeasonOutcome { champion, placements, final_week, termination })
}
