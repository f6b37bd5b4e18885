//! JSON entry point for collaborators: season replay as a string-in /
//! string-out call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::{finalize, replay};
use crate::error::{KormError, Result};
use crate::models::{ScoreRow, ScoreTable, SeasonConfig, SeasonOutcome, TeamCode, TeamState, WeekResult};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub config: SeasonConfig,
    pub scores: Vec<ScoreRow>,
    /// Truncate the replay at this week for an as-of standings snapshot.
    #[serde(default)]
    pub stop_at_week: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    /// Last week actually processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_week: Option<u32>,
    pub decided: bool,
    pub weeks: Vec<WeekResult>,
    pub teams: BTreeMap<TeamCode, TeamState>,
    /// Present only for decided seasons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SeasonOutcome>,
}

/// Replay a season described by a JSON request and return the JSON response.
///
/// The reporting layer owns all rendering of the response; this function
/// never touches the filesystem.
pub fn replay_season_json(request_json: &str) -> Result<String> {
    let request: SeasonRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(KormError::InvalidConfig(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    let table = ScoreTable::from_rows(request.scores)?;
    let result = replay(&request.config, &table, request.stop_at_week)?;
    let outcome = if result.is_decided() {
        Some(finalize(&result, &request.config)?)
    } else {
        None
    };

    let response = SeasonResponse {
        schema_version: SCHEMA_VERSION,
        final_week: result.final_week(),
        decided: result.is_decided(),
        weeks: result.weeks,
        teams: result.teams,
        outcome,
    };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn request_json(stop_at_week: Option<u32>) -> String {
        let scores: Vec<Value> = (1..=2u32)
            .flat_map(|week| {
                vec![
                    serde_json::json!({"week": week, "team": "A", "score": 100.0}),
                    serde_json::json!({"week": week, "team": "B", "score": 90.0}),
                    serde_json::json!({"week": week, "team": "C", "score": 80.0 - week as f64}),
                ]
            })
            .collect();
        serde_json::json!({
            "schema_version": 1,
            "config": {
                "entry_fee": 100,
                "pool": 300,
                "first_week": 1,
                "last_week": 2,
                "roster": ["A", "B", "C"],
            },
            "scores": scores,
            "stop_at_week": stop_at_week,
        })
        .to_string()
    }

    #[test]
    fn decided_season_round_trips() {
        // C is lowest both weeks: struck twice, out at week 2, leaving A and
        // B active at window close.
        let response_json = replay_season_json(&request_json(None)).unwrap();
        let response: Value = serde_json::from_str(&response_json).unwrap();

        assert_eq!(response["schema_version"], 1);
        assert_eq!(response["decided"], true);
        assert_eq!(response["final_week"], 2);
        assert_eq!(response["weeks"].as_array().unwrap().len(), 2);
        assert_eq!(response["outcome"]["champion"], "A");
        assert_eq!(response["outcome"]["termination"], "window_closed");
        assert_eq!(response["teams"]["C"]["status"], "eliminated");
    }

    #[test]
    fn snapshot_has_no_outcome() {
        let response_json = replay_season_json(&request_json(Some(1))).unwrap();
        let response: Value = serde_json::from_str(&response_json).unwrap();

        assert_eq!(response["decided"], false);
        assert_eq!(response["final_week"], 1);
        assert!(response.get("outcome").is_none());
        assert_eq!(response["teams"]["C"]["status"], "on_notice");
    }

    #[test]
    fn unsupported_schema_version_is_rejected() {
        let request = serde_json::json!({
            "schema_version": 99,
            "config": {
                "entry_fee": 100,
                "pool": 300,
                "first_week": 1,
                "last_week": 2,
                "roster": ["A", "B", "C"],
            },
            "scores": [],
        })
        .to_string();

        let err = replay_season_json(&request).unwrap_err();
        assert!(matches!(err, KormError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_request_is_a_serialization_error() {
        let err = replay_season_json("{not json").unwrap_err();
        assert!(matches!(err, KormError::Serialization(_)));
    }

    #[test]
    fn duplicate_score_rows_are_rejected() {
        let request = serde_json::json!({
            "schema_version": 1,
            "config": {
                "entry_fee": 100,
                "pool": 300,
                "first_week": 1,
                "last_week": 1,
                "roster": ["A", "B", "C"],
            },
            "scores": [
                {"week": 1, "team": "A", "score": 100.0},
                {"week": 1, "team": "A", "score": 99.0},
            ],
        })
        .to_string();

        let err = replay_season_json(&request).unwrap_err();
        assert!(matches!(err, KormError::DuplicateScore { .. }));
    }
}
