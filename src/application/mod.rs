//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Following CQRS, it separates
//! command handlers (ranking runs) from query handlers (presets).

pub mod handlers;

pub use handlers::{
    ComputeRankingCommand, ComputeRankingHandler, ComputeRankingResult, GetPresetHandler,
    GetPresetQuery, GetPresetResult,
};
