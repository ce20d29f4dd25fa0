//! Ranking handlers.
//!
//! Stateless handlers that run the ARAS pipeline and serve presets.

mod compute_ranking;
mod get_preset;

pub use compute_ranking::{ComputeRankingCommand, ComputeRankingHandler, ComputeRankingResult};
pub use get_preset::{GetPresetHandler, GetPresetQuery, GetPresetResult};
