//! Weighted Aggregator - applies weights and sums rows into optimality scores.

use serde::Serialize;
use std::collections::HashMap;

use super::{ArasError, NormalizedMatrix, RowHeader};

/// A weighted row together with its optimality score Si.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedRow {
    #[serde(flatten)]
    pub header: RowHeader,
    pub values: Vec<f64>,
    pub optimality_score: f64,
}

/// Normalized matrix scaled by criterion weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedMatrix {
    pub criteria: Vec<String>,
    pub rows: Vec<WeightedRow>,
}

impl WeightedMatrix {
    /// S0, the optimality score of row 0.
    pub fn optimal_score(&self) -> Option<f64> {
        self.rows.first().map(|row| row.optimality_score)
    }

    /// Splits Si into S0 and the alternative scores for ranking.
    ///
    /// # Errors
    /// - `EmptyMatrix` when there is no optimal row
    pub fn scores(&self) -> Result<OptimalityScores, ArasError> {
        let (optimal, alternatives) = self.rows.split_first().ok_or(ArasError::EmptyMatrix)?;
        Ok(OptimalityScores {
            s0: optimal.optimality_score,
            alternatives: alternatives
                .iter()
                .map(|row| (row.header.clone(), row.optimality_score))
                .collect(),
        })
    }
}

/// Input to the utility ranker: S0 plus Si per alternative, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalityScores {
    pub s0: f64,
    pub alternatives: Vec<(RowHeader, f64)>,
}

/// Weighting and row aggregation.
pub struct WeightedAggregator;

impl WeightedAggregator {
    /// Multiplies each column by its weight and sums every row.
    ///
    /// Weights are matched by criterion name and are used as given; no
    /// rescaling to a unit sum happens here.
    ///
    /// # Errors
    /// - `MissingWeight` when a column has no entry in `weights`
    pub fn aggregate(
        normalized: &NormalizedMatrix,
        weights: &HashMap<String, f64>,
    ) -> Result<WeightedMatrix, ArasError> {
        let column_weights = normalized
            .criteria
            .iter()
            .map(|name| {
                weights
                    .get(name)
                    .copied()
                    .ok_or_else(|| ArasError::MissingWeight(name.clone()))
            })
            .collect::<Result<Vec<f64>, ArasError>>()?;

        let rows = normalized
            .rows
            .iter()
            .map(|row| {
                let values: Vec<f64> = row
                    .values
                    .iter()
                    .zip(&column_weights)
                    .map(|(value, weight)| value * weight)
                    .collect();
                let optimality_score = values.iter().sum();
                WeightedRow {
                    header: row.header.clone(),
                    values,
                    optimality_score,
                }
            })
            .collect();

        Ok(WeightedMatrix {
            criteria: normalized.criteria.clone(),
            rows,
        })
    }
}
