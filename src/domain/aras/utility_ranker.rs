//! Utility Ranker - utility degrees relative to the optimum and the final order.

use serde::Serialize;
use std::cmp::Ordering;

use super::{ArasError, OptimalityScores, RowHeader};

/// Score line for one alternative in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    /// 1-based position; rank 1 is the recommended alternative.
    pub rank: usize,
    #[serde(flatten)]
    pub header: RowHeader,
    /// Si
    pub optimality_score: f64,
    /// Ki = Si / S0
    pub utility_degree: f64,
}

/// Alternatives ordered by utility degree, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub optimal_score: f64,
    pub rows: Vec<ScoreRow>,
}

impl RankedResult {
    /// The recommended alternative.
    pub fn best(&self) -> Option<&ScoreRow> {
        self.rows.first()
    }

    pub fn position_of(&self, alternative_id: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.header.id == alternative_id)
            .map(|row| row.rank)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ranking by utility degree.
pub struct UtilityRanker;

impl UtilityRanker {
    /// Ki for a single score against S0.
    pub fn utility_degree(score: f64, s0: f64) -> Result<f64, ArasError> {
        if s0 <= 0.0 || !s0.is_finite() {
            return Err(ArasError::DegenerateOptimum { s0 });
        }
        Ok(score / s0)
    }

    /// Computes Ki for every alternative and sorts by Ki descending.
    ///
    /// The sort is stable: equal Ki keep their input order.
    ///
    /// # Errors
    /// - `DegenerateOptimum` when S0 is zero or not finite
    pub fn rank(scores: &OptimalityScores) -> Result<RankedResult, ArasError> {
        let mut rows = scores
            .alternatives
            .iter()
            .map(|(header, si)| {
                Ok(ScoreRow {
                    rank: 0,
                    header: header.clone(),
                    optimality_score: *si,
                    utility_degree: Self::utility_degree(*si, scores.s0)?,
                })
            })
            .collect::<Result<Vec<_>, ArasError>>()?;

        // With no alternatives there is nothing to divide, but S0 must still be usable.
        if rows.is_empty() {
            Self::utility_degree(scores.s0, scores.s0)?;
        }

        rows.sort_by(|a, b| {
            b.utility_degree
                .partial_cmp(&a.utility_degree)
                .unwrap_or(Ordering::Equal)
        });
        for (position, row) in rows.iter_mut().enumerate() {
            row.rank = position + 1;
        }

        Ok(RankedResult {
            optimal_score: scores.s0,
            rows,
        })
    }
}
