pub mod season_json;

pub use season_json::{replay_season_json, SeasonRequest, SeasonResponse, SCHEMA_VERSION};
