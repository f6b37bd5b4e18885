pub mod outcome;
pub mod scores;
pub mod season;
pub mod team;
pub mod week_result;

pub use outcome::{Placement, SeasonOutcome, TerminationReason};
pub use scores::{ScoreRow, ScoreTable};
pub use season::SeasonConfig;
pub use team::{Strike, TeamCode, TeamState, TeamStatus};
pub use week_result::{RankedScore, StrikeMode, WeekResult};
