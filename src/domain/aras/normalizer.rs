//! Normalizer - benefit/cost normalization of the extended matrix.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    ArasError, CriterionConfig, CriterionDirection, DegenerateReason, ExtendedMatrix, MatrixRow,
};

/// What to do with a column whose divisor is zero or undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateColumnPolicy {
    /// Stop the run with `DivisionByZero`.
    #[default]
    FailFast,
    /// Set every normalized value of the column to 0 and continue.
    ZeroColumn,
}

/// Extended matrix after per-column normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    pub criteria: Vec<String>,
    pub rows: Vec<MatrixRow>,
    /// Columns replaced by zeros under `DegenerateColumnPolicy::ZeroColumn`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zeroed_columns: Vec<String>,
}

/// Column normalization for ARAS.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every column of `extended` independently.
    ///
    /// # Algorithm
    /// - Benefit: `x / Σx`
    /// - Cost: `(1/x) / Σ(1/x)`
    ///
    /// Sums run over all rows, optimal row included.
    ///
    /// # Errors
    /// - `UnknownCriterion` when a column is absent from `config`
    /// - `DivisionByZero` for a degenerate column under `FailFast`
    pub fn normalize(
        extended: &ExtendedMatrix,
        config: &CriterionConfig,
        policy: DegenerateColumnPolicy,
    ) -> Result<NormalizedMatrix, ArasError> {
        let mut rows: Vec<MatrixRow> = extended
            .rows
            .iter()
            .map(|row| MatrixRow {
                header: row.header.clone(),
                values: vec![0.0; row.values.len()],
            })
            .collect();
        let mut zeroed_columns = Vec::new();

        for (col, name) in extended.criteria.iter().enumerate() {
            let direction = config
                .direction_of(name)
                .ok_or_else(|| ArasError::UnknownCriterion(name.clone()))?;

            let column: Vec<f64> = extended.column(col).collect();
            match Self::normalize_column(&column, direction) {
                Ok(normalized) => {
                    for (row, value) in rows.iter_mut().zip(normalized) {
                        row.values[col] = value;
                    }
                }
                Err(reason) => match policy {
                    DegenerateColumnPolicy::FailFast => {
                        return Err(ArasError::DivisionByZero {
                            criterion: name.clone(),
                            reason,
                        });
                    }
                    DegenerateColumnPolicy::ZeroColumn => {
                        warn!(criterion = %name, %reason, "Degenerate column normalized to zero");
                        zeroed_columns.push(name.clone());
                    }
                },
            }
        }

        Ok(NormalizedMatrix {
            criteria: extended.criteria.clone(),
            rows,
            zeroed_columns,
        })
    }

    /// Normalizes a single column, or explains why it cannot be.
    pub fn normalize_column(
        column: &[f64],
        direction: CriterionDirection,
    ) -> Result<Vec<f64>, DegenerateReason> {
        match direction {
            CriterionDirection::Benefit => {
                let sum: f64 = column.iter().sum();
                if sum == 0.0 {
                    return Err(DegenerateReason::ZeroColumnSum);
                }
                if !sum.is_finite() {
                    return Err(DegenerateReason::ColumnSumOverflow);
                }
                Ok(column.iter().map(|v| v / sum).collect())
            }
            CriterionDirection::Cost => {
                if column.iter().any(|v| *v == 0.0) {
                    return Err(DegenerateReason::ZeroCostValue);
                }
                let reciprocals: Vec<f64> = column.iter().map(|v| 1.0 / v).collect();
                let sum: f64 = reciprocals.iter().sum();
                if sum == 0.0 || !sum.is_finite() {
                    return Err(DegenerateReason::ZeroReciprocalSum);
                }
                Ok(reciprocals.iter().map(|r| r / sum).collect())
            }
        }
    }
}
