//! Optimal Row Deriver - builds the synthetic ideal alternative (X0).

use serde::Serialize;

use super::{
    ArasError, CriterionConfig, CriterionDirection, DecisionMatrix, MatrixRow, RowHeader,
};

/// Per-criterion best values, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalRow {
    pub criteria: Vec<String>,
    pub values: Vec<f64>,
}

impl OptimalRow {
    /// Optimal value for a named criterion.
    pub fn value_of(&self, criterion: &str) -> Option<f64> {
        self.criteria
            .iter()
            .position(|c| c == criterion)
            .map(|i| self.values[i])
    }

    /// Prepends this row to `matrix` as row 0.
    pub fn extend(&self, matrix: &DecisionMatrix) -> ExtendedMatrix {
        let mut rows = Vec::with_capacity(matrix.alternative_count() + 1);
        rows.push(MatrixRow {
            header: RowHeader::optimal(),
            values: self.values.clone(),
        });
        rows.extend(matrix.rows().iter().cloned());

        ExtendedMatrix {
            criteria: self.criteria.clone(),
            rows,
        }
    }
}

/// Decision matrix with the optimal row at index 0.
///
/// Downstream stages treat row 0 like any other row so that column sums
/// include the optimum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedMatrix {
    pub criteria: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl ExtendedMatrix {
    /// Row 0, or `None` for a table with no rows.
    pub fn optimal(&self) -> Option<&MatrixRow> {
        self.rows.first()
    }

    /// Alternative rows, optimal row excluded.
    pub fn alternatives(&self) -> &[MatrixRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.values[index])
    }
}

/// Derives the optimal row from a decision matrix.
pub struct OptimalRowDeriver;

impl OptimalRowDeriver {
    /// Picks the column max for benefit criteria and the column min for cost criteria.
    ///
    /// # Errors
    /// - `EmptyMatrix` when there are no alternatives
    /// - `UnknownCriterion` when a matrix column is absent from `config`
    pub fn derive(
        matrix: &DecisionMatrix,
        config: &CriterionConfig,
    ) -> Result<OptimalRow, ArasError> {
        if matrix.is_empty() {
            return Err(ArasError::EmptyMatrix);
        }

        let mut values = Vec::with_capacity(matrix.criterion_count());
        for (index, name) in matrix.criteria().iter().enumerate() {
            let direction = config
                .direction_of(name)
                .ok_or_else(|| ArasError::UnknownCriterion(name.clone()))?;

            let column = matrix.column(index);
            let best = match direction {
                CriterionDirection::Benefit => column.fold(f64::NEG_INFINITY, f64::max),
                CriterionDirection::Cost => column.fold(f64::INFINITY, f64::min),
            };
            values.push(best);
        }

        Ok(OptimalRow {
            criteria: matrix.criteria().to_vec(),
            values,
        })
    }
}
