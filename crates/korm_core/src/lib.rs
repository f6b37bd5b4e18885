//! # korm_core - Deterministic KORM Elimination Competition Engine
//!
//! This library computes the season-long "King of Rage Mountain" weekly
//! elimination competition: per-week strike assignment, eliminations,
//! point-in-time standings reconstruction, and final placement/payout.
//!
//! ## Features
//! - 100% deterministic replay (same inputs = same results)
//! - Two-strike elimination with tie-inclusive strike assignment
//! - Strike mode switches with the shrinking active field (5+ teams =
//!   2-strike, 4 or fewer = 1-strike)
//! - As-of-week standings via truncated replay (single code path)
//! - JSON API for easy integration with reporting layers

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main entry points
pub use api::{replay_season_json, SeasonRequest, SeasonResponse};
pub use engine::{apply_week, finalize, replay, SeasonReplay};
pub use error::{KormError, Result};

// Re-export the data model
pub use models::{
    Placement, RankedScore, ScoreRow, ScoreTable, SeasonConfig, SeasonOutcome, Strike,
    StrikeMode, TeamCode, TeamState, TeamStatus, TerminationReason, WeekResult,
};
