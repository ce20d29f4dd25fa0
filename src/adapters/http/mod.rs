//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod ranking;

// Re-export key types for convenience
pub use ranking::ranking_routes;
pub use ranking::RankingAppState;
