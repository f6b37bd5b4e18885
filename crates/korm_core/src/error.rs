use thiserror::Error;

/// Errors surfaced by the KORM engine.
///
/// Input-integrity and configuration errors are fatal for the season being
/// replayed; the caller must fix the input data. `InvariantViolation` means a
/// bug in the engine itself, not a data problem.
#[derive(Error, Debug)]
pub enum KormError {
    #[error("no score for active team {team} in week {week}")]
    MissingScore { team: String, week: u32 },

    #[error("score present for non-active team {team} in week {week}")]
    UnexpectedScore { team: String, week: u32 },

    #[error("duplicate score row for team {team} in week {week}")]
    DuplicateScore { team: String, week: u32 },

    #[error("invalid season config: {0}")]
    InvalidConfig(String),

    #[error("season not decided: replay stopped before a terminus")]
    SeasonUndecided,

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KormError>;
