//! Ranking HTTP adapter module.
//!
//! Provides REST API endpoints for ARAS rankings and presets.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, RankingRequest};
pub use handlers::{RankingApiError, RankingAppState};
pub use routes::ranking_routes;
