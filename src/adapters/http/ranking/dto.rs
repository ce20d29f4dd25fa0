//! HTTP DTOs for ranking endpoints.
//!
//! The report and preset types are already designed for serialization,
//! so responses re-export them directly.

pub use crate::domain::aras::{ArasReport, Preset};

use serde::{Deserialize, Serialize};

use crate::application::handlers::ComputeRankingCommand;
use crate::domain::aras::{Alternative, Criterion, PipelineOptions};
use crate::domain::foundation::DomainError;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/aras/rankings`.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingRequest {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub options: Option<PipelineOptions>,
}

impl From<RankingRequest> for ComputeRankingCommand {
    fn from(request: RankingRequest) -> Self {
        Self {
            criteria: request.criteria,
            alternatives: request.alternatives,
            options: request.options,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// ARAS ranking response: the full report plus its one-line conclusion.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    #[serde(flatten)]
    pub report: ArasReport,
    pub conclusion: String,
}

impl From<ArasReport> for RankingResponse {
    fn from(report: ArasReport) -> Self {
        let conclusion = report.conclusion();
        Self { report, conclusion }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries the domain code and, when present, its details.
    pub fn domain(error: &DomainError) -> Self {
        let details = (!error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
