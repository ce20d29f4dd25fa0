//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ranking;

pub use ranking::{
    ComputeRankingCommand, ComputeRankingHandler, ComputeRankingResult, GetPresetHandler,
    GetPresetQuery, GetPresetResult,
};
