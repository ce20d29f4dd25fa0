//! ComputeRankingHandler - Command handler for a single ARAS run.
//!
//! Validates the request, runs the pipeline and wraps the outcome in a
//! report. Nothing is persisted; each call is independent.

use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::domain::aras::{
    Alternative, ArasPipeline, ArasReport, Criterion, CriterionConfig, PipelineOptions,
};
use crate::domain::foundation::{DomainError, RunId, Timestamp, ValidationError};

/// Command to rank a set of alternatives.
#[derive(Debug, Clone)]
pub struct ComputeRankingCommand {
    /// Criteria in column order.
    pub criteria: Vec<Criterion>,
    /// Alternatives in input order.
    pub alternatives: Vec<Alternative>,
    /// Per-request policy override; configured defaults apply when absent.
    pub options: Option<PipelineOptions>,
}

/// Result of a successful ranking.
pub type ComputeRankingResult = ArasReport;

/// Handler for ARAS ranking runs.
#[derive(Debug, Clone, Default)]
pub struct ComputeRankingHandler {
    analysis: AnalysisConfig,
}

impl ComputeRankingHandler {
    pub fn new(analysis: AnalysisConfig) -> Self {
        Self { analysis }
    }

    pub fn handle(&self, cmd: ComputeRankingCommand) -> Result<ComputeRankingResult, DomainError> {
        if cmd.criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria").into());
        }

        let run_id = RunId::new();
        let options = cmd
            .options
            .unwrap_or_else(|| self.analysis.pipeline_options());
        let config = CriterionConfig::from_criteria(cmd.criteria)?;

        let weights = self.analysis.weight_policy.check(&config);
        if !weights.is_clean() {
            warn!(
                run_id = %run_id,
                total = weights.total,
                out_of_bounds = ?weights.out_of_bounds,
                "Weights outside advisory policy"
            );
        }

        let outcome = ArasPipeline::run(&config, &cmd.alternatives, options).map_err(|e| {
            warn!(run_id = %run_id, error = %e, "ARAS run rejected");
            DomainError::from(e)
        })?;
        let report = ArasReport::build(run_id, Timestamp::now(), &config, weights, outcome)?;

        info!(
            run_id = %run_id,
            alternatives = report.ranking.len(),
            best = %report.best.id,
            utility = report.best.utility_degree,
            "ARAS ranking computed"
        );

        Ok(report)
    }
}
