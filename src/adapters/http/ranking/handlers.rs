//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::application::handlers::{
    ComputeRankingCommand, ComputeRankingHandler, GetPresetHandler, GetPresetQuery,
};
use crate::config::{AnalysisConfig, AppConfig};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, HealthResponse, Preset, RankingRequest, RankingResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub enum RankingApiError {
    /// Body could not be parsed.
    BadRequest(String),
    NotFound(DomainError),
    /// Well-formed input the ARAS computation cannot rank.
    Unprocessable(DomainError),
    Internal(String),
}

impl RankingApiError {
    /// Maps a domain error, hiding internal messages unless `verbose`.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        match error.code {
            ErrorCode::PresetUnavailable => RankingApiError::NotFound(error),
            ErrorCode::InternalError => {
                error!(error = %error, "Internal error while ranking");
                let message = if verbose {
                    error.message
                } else {
                    "Internal server error".to_string()
                };
                RankingApiError::Internal(message)
            }
            _ => RankingApiError::Unprocessable(error),
        }
    }
}

impl IntoResponse for RankingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RankingApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            RankingApiError::NotFound(err) => (StatusCode::NOT_FOUND, ErrorResponse::domain(&err)),
            RankingApiError::Unprocessable(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::domain(&err))
            }
            RankingApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for RankingApiError {
    fn from(rejection: JsonRejection) -> Self {
        RankingApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for ranking endpoints.
#[derive(Debug, Clone, Default)]
pub struct RankingAppState {
    pub analysis: AnalysisConfig,
    pub verbose_errors: bool,
    pub presets_enabled: bool,
}

impl RankingAppState {
    pub fn new(analysis: AnalysisConfig) -> Self {
        Self {
            analysis,
            verbose_errors: false,
            presets_enabled: true,
        }
    }

    /// State derived from the loaded application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            analysis: config.analysis.clone(),
            verbose_errors: config.features.verbose_errors,
            presets_enabled: config.features.enable_presets,
        }
    }

    pub fn compute_ranking_handler(&self) -> ComputeRankingHandler {
        ComputeRankingHandler::new(self.analysis.clone())
    }

    pub fn get_preset_handler(&self) -> GetPresetHandler {
        GetPresetHandler::new()
    }

    fn api_error(&self, error: DomainError) -> RankingApiError {
        RankingApiError::from_domain(error, self.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/aras/rankings
///
/// Ranks the posted alternatives and returns the full report.
pub async fn compute_ranking(
    State(state): State<RankingAppState>,
    payload: Result<Json<RankingRequest>, JsonRejection>,
) -> Result<Json<RankingResponse>, RankingApiError> {
    let Json(request) = payload?;

    let handler = state.compute_ranking_handler();
    let report = handler
        .handle(ComputeRankingCommand::from(request))
        .map_err(|e| state.api_error(e))?;

    Ok(Json(RankingResponse::from(report)))
}

/// GET /api/aras/presets/:name
///
/// Returns a built-in preset, shaped so it can be posted back as a request.
pub async fn get_preset(
    State(state): State<RankingAppState>,
    Path(name): Path<String>,
) -> Result<Json<Preset>, RankingApiError> {
    let handler = state.get_preset_handler();
    let preset = handler
        .handle(GetPresetQuery { name })
        .map_err(|e| state.api_error(e))?;

    Ok(Json(preset))
}

/// GET /api/aras/presets/:name/ranking
///
/// Ranks a built-in preset with the configured default policies.
pub async fn rank_preset(
    State(state): State<RankingAppState>,
    Path(name): Path<String>,
) -> Result<Json<RankingResponse>, RankingApiError> {
    let preset = state
        .get_preset_handler()
        .handle(GetPresetQuery { name })
        .map_err(|e| state.api_error(e))?;

    let report = state
        .compute_ranking_handler()
        .handle(ComputeRankingCommand {
            criteria: preset.criteria,
            alternatives: preset.alternatives,
            options: None,
        })
        .map_err(|e| state.api_error(e))?;

    Ok(Json(RankingResponse::from(report)))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
