//! ARAS pipeline - wires the stages together for one computation run.
//!
//! Each stage consumes the previous stage's table and produces a new one;
//! nothing is mutated in place and nothing is carried between runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    Alternative, ArasError, CriterionConfig, DecisionMatrix, DegenerateColumnPolicy,
    ExtendedMatrix, MissingValuePolicy, NormalizedMatrix, Normalizer, OptimalRow,
    OptimalRowDeriver, RankedResult, ScoreRow, UtilityRanker, WeightedAggregator, WeightedMatrix,
};

/// Policies applied to one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    #[serde(default)]
    pub missing_values: MissingValuePolicy,
    #[serde(default)]
    pub degenerate_columns: DegenerateColumnPolicy,
}

impl PipelineOptions {
    /// Zero-filling missing values and zeroing degenerate columns.
    pub fn permissive() -> Self {
        Self {
            missing_values: MissingValuePolicy::TreatAsZero,
            degenerate_columns: DegenerateColumnPolicy::ZeroColumn,
        }
    }
}

/// Every intermediate table of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArasOutcome {
    pub matrix: DecisionMatrix,
    pub optimal_row: OptimalRow,
    pub extended: ExtendedMatrix,
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub ranking: RankedResult,
}

impl ArasOutcome {
    /// The rank-1 alternative.
    pub fn best(&self) -> Option<&ScoreRow> {
        self.ranking.best()
    }
}

/// Stateless ARAS computation.
pub struct ArasPipeline;

impl ArasPipeline {
    /// Lays out `alternatives` against `config` and runs every stage.
    pub fn run(
        config: &CriterionConfig,
        alternatives: &[Alternative],
        options: PipelineOptions,
    ) -> Result<ArasOutcome, ArasError> {
        let matrix = DecisionMatrix::from_alternatives(config, alternatives, options.missing_values)?;
        Self::run_matrix(config, matrix, options)
    }

    /// Runs every stage over an already built matrix.
    ///
    /// # Errors
    /// Fails fast with the first stage error; see each stage for the list.
    /// A matrix whose columns differ from `config` is rejected before any
    /// stage runs.
    pub fn run_matrix(
        config: &CriterionConfig,
        matrix: DecisionMatrix,
        options: PipelineOptions,
    ) -> Result<ArasOutcome, ArasError> {
        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Running ARAS pipeline"
        );

        matrix.conforms_to(config)?;
        let optimal_row = OptimalRowDeriver::derive(&matrix, config)?;
        let extended = optimal_row.extend(&matrix);
        let normalized = Normalizer::normalize(&extended, config, options.degenerate_columns)?;
        let weighted = WeightedAggregator::aggregate(&normalized, &config.weights())?;
        let ranking = UtilityRanker::rank(&weighted.scores()?)?;

        if let Some(best) = ranking.best() {
            debug!(
                best = %best.header.id,
                utility = best.utility_degree,
                s0 = ranking.optimal_score,
                "ARAS pipeline complete"
            );
        }

        Ok(ArasOutcome {
            matrix,
            optimal_row,
            extended,
            normalized,
            weighted,
            ranking,
        })
    }
}
