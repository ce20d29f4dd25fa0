//! ARAS report - the full, displayable result of one run.

use serde::Serialize;

use super::{
    ArasError, ArasOutcome, Criterion, CriterionConfig, ExtendedMatrix, NormalizedMatrix,
    RowHeader, ScoreRow, UtilityRanker, WeightSummary, WeightedRow,
};
use crate::domain::foundation::{RunId, Timestamp};

/// Weighted row with its utility degree.
///
/// The optimal row is included; its utility degree is exactly 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedReportRow {
    #[serde(flatten)]
    pub row: WeightedRow,
    pub utility_degree: f64,
}

/// The recommended alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestAlternative {
    pub code: String,
    pub id: String,
    pub label: String,
    pub utility_degree: f64,
}

impl From<&ScoreRow> for BestAlternative {
    fn from(row: &ScoreRow) -> Self {
        Self {
            code: row.header.code.clone(),
            id: row.header.id.clone(),
            label: row.header.label.clone(),
            utility_degree: row.utility_degree,
        }
    }
}

/// Every table a user needs to audit an ARAS recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArasReport {
    pub run_id: RunId,
    pub generated_at: Timestamp,
    pub criteria: Vec<Criterion>,
    pub weights: WeightSummary,
    pub extended_matrix: ExtendedMatrix,
    pub normalized_matrix: NormalizedMatrix,
    pub weighted_matrix: Vec<WeightedReportRow>,
    pub optimal_score: f64,
    pub ranking: Vec<ScoreRow>,
    pub best: BestAlternative,
}

impl ArasReport {
    /// Assembles a report from a finished run.
    ///
    /// # Errors
    /// - `EmptyMatrix` when the run ranked nothing
    /// - `DegenerateOptimum` when S0 cannot divide
    pub fn build(
        run_id: RunId,
        generated_at: Timestamp,
        config: &CriterionConfig,
        weights: WeightSummary,
        outcome: ArasOutcome,
    ) -> Result<Self, ArasError> {
        let best = outcome
            .best()
            .map(BestAlternative::from)
            .ok_or(ArasError::EmptyMatrix)?;
        let s0 = outcome.ranking.optimal_score;

        let weighted_matrix = outcome
            .weighted
            .rows
            .into_iter()
            .map(|row| {
                let utility_degree = if row.header.is_optimal() {
                    1.0
                } else {
                    UtilityRanker::utility_degree(row.optimality_score, s0)?
                };
                Ok(WeightedReportRow {
                    row,
                    utility_degree,
                })
            })
            .collect::<Result<Vec<_>, ArasError>>()?;

        Ok(Self {
            run_id,
            generated_at,
            criteria: config.criteria().to_vec(),
            weights,
            extended_matrix: outcome.extended,
            normalized_matrix: outcome.normalized,
            weighted_matrix,
            optimal_score: s0,
            ranking: outcome.ranking.rows,
            best,
        })
    }

    /// One-sentence recommendation naming the rank-1 alternative.
    pub fn conclusion(&self) -> String {
        format!(
            "Based on the ARAS calculation, the best alternative is {} (Rank 1) with a utility degree of {:.4}.",
            self.best.label, self.best.utility_degree
        )
    }

    /// Header of the ranked row at 1-based `rank`.
    pub fn at_rank(&self, rank: usize) -> Option<&RowHeader> {
        self.ranking
            .iter()
            .find(|row| row.rank == rank)
            .map(|row| &row.header)
    }
}
