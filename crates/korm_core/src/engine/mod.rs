//! The KORM computation core: single-week strike assignment, season replay,
//! and final standings.

pub mod replay;
pub mod standings;
pub mod strike;


pub use replay::{replay, SeasonReplay};
pub use standings::finalize;
pub use strike::apply_week;
