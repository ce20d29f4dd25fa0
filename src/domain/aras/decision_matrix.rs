//! Decision Matrix - the alternative x criterion value table.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{ArasError, CriterionConfig};

/// Code, id and label of the synthetic optimal row.
pub const OPTIMAL_ROW_CODE: &str = "A0";
pub const OPTIMAL_ROW_ID: &str = "X0";
pub const OPTIMAL_ROW_LABEL: &str = "Optimal (X0)";

/// An alternative as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Raw values keyed by criterion name.
    pub values: HashMap<String, f64>,
}

impl Alternative {
    /// Creates an alternative with no values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            values: HashMap::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a value for a criterion.
    pub fn with_value(mut self, criterion: impl Into<String>, value: f64) -> Self {
        self.values.insert(criterion.into(), value);
        self
    }

    /// Label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// How to treat an alternative that lacks a value for a configured criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Fail with `MissingValue`.
    #[default]
    Reject,
    /// Substitute 0.
    TreatAsZero,
}

/// Identifies a row of any pipeline table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowHeader {
    /// Positional code: `A0` for the optimal row, `A1..An` for alternatives.
    pub code: String,
    pub id: String,
    pub label: String,
}

impl RowHeader {
    /// Header for the synthetic optimal row.
    pub fn optimal() -> Self {
        Self {
            code: OPTIMAL_ROW_CODE.to_string(),
            id: OPTIMAL_ROW_ID.to_string(),
            label: OPTIMAL_ROW_LABEL.to_string(),
        }
    }

    /// Header for the alternative at zero-based input position `index`.
    pub fn alternative(index: usize, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: format!("A{}", index + 1),
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.code == OPTIMAL_ROW_CODE
    }
}

/// One row of a pipeline table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    #[serde(flatten)]
    pub header: RowHeader,
    /// Values in criterion column order.
    pub values: Vec<f64>,
}

/// Immutable alternative x criterion table.
///
/// Columns follow the criterion order of the configuration it was built
/// against; rows follow input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl DecisionMatrix {
    /// Creates a builder for positional construction.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Lays out `alternatives` against the columns of `config`.
    ///
    /// # Errors
    /// - `EmptyField` for an alternative with a blank id
    /// - `ReservedAlternative` for the optimal row id
    /// - `DuplicateAlternative` when an id repeats
    /// - `UnknownCriterion` for a value keyed by an unconfigured criterion
    /// - `MissingValue` for an absent value under `MissingValuePolicy::Reject`
    /// - `InvalidValue` for negative, NaN or infinite values
    pub fn from_alternatives(
        config: &CriterionConfig,
        alternatives: &[Alternative],
        policy: MissingValuePolicy,
    ) -> Result<Self, ArasError> {
        let criteria = config.names();
        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(alternatives.len());

        for (index, alternative) in alternatives.iter().enumerate() {
            validate_id(&alternative.id, &mut seen)?;

            if let Some(unknown) = alternative
                .values
                .keys()
                .find(|name| config.get(name).is_none())
            {
                return Err(ArasError::UnknownCriterion(unknown.clone()));
            }

            let mut values = Vec::with_capacity(criteria.len());
            for criterion in &criteria {
                let value = match (alternative.values.get(criterion), policy) {
                    (Some(v), _) => *v,
                    (None, MissingValuePolicy::TreatAsZero) => 0.0,
                    (None, MissingValuePolicy::Reject) => {
                        return Err(ArasError::MissingValue {
                            alternative: alternative.id.clone(),
                            criterion: criterion.clone(),
                        });
                    }
                };
                if !is_admissible(value) {
                    return Err(ArasError::InvalidValue {
                        alternative: alternative.id.clone(),
                        criterion: criterion.clone(),
                    });
                }
                values.push(value);
            }

            rows.push(MatrixRow {
                header: RowHeader::alternative(index, &alternative.id, alternative.display_name()),
                values,
            });
        }

        Ok(Self { criteria, rows })
    }

    /// Criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Checks that the columns are exactly the criteria of `config`.
    ///
    /// # Errors
    /// - `UnknownCriterion` for a column absent from `config`
    /// - `MissingValue` for a configured criterion with no column, naming
    ///   the first alternative
    /// - `EmptyMatrix` for a missing column when there are no rows
    pub fn conforms_to(&self, config: &CriterionConfig) -> Result<(), ArasError> {
        if let Some(unknown) = self.criteria.iter().find(|name| config.get(name).is_none()) {
            return Err(ArasError::UnknownCriterion(unknown.clone()));
        }
        if let Some(missing) = config
            .names()
            .into_iter()
            .find(|name| !self.criteria.contains(name))
        {
            let first = self.rows.first().ok_or(ArasError::EmptyMatrix)?;
            return Err(ArasError::MissingValue {
                alternative: first.header.id.clone(),
                criterion: missing,
            });
        }
        Ok(())
    }

    /// Values of column `index` in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.values[index])
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builder for constructing a DecisionMatrix from positional rows.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<String>,
    rows: Vec<(String, Option<String>, Vec<f64>)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative row whose values are in column order.
    pub fn row(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push((id.into(), None, values));
        self
    }

    /// Adds a labelled alternative row.
    pub fn labelled_row(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        self.rows.push((id.into(), Some(label.into()), values));
        self
    }

    /// Builds the matrix, applying the same checks as `from_alternatives`.
    ///
    /// A blank or repeated column name is a `DuplicateCriterion`. A short
    /// row reports the first missing column; a long row reports an unknown
    /// criterion.
    pub fn build(self) -> Result<DecisionMatrix, ArasError> {
        let mut names = HashSet::new();
        for name in &self.criteria {
            if name.trim().is_empty() || !names.insert(name.as_str()) {
                return Err(ArasError::DuplicateCriterion(name.clone()));
            }
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(self.rows.len());

        for (index, (id, label, values)) in self.rows.into_iter().enumerate() {
            validate_id(&id, &mut seen)?;

            if values.len() < self.criteria.len() {
                return Err(ArasError::MissingValue {
                    alternative: id,
                    criterion: self.criteria[values.len()].clone(),
                });
            }
            if values.len() > self.criteria.len() {
                return Err(ArasError::UnknownCriterion(format!(
                    "column {}",
                    self.criteria.len() + 1
                )));
            }
            if let Some(pos) = values.iter().position(|v| !is_admissible(*v)) {
                return Err(ArasError::InvalidValue {
                    alternative: id,
                    criterion: self.criteria[pos].clone(),
                });
            }

            let label = label.unwrap_or_else(|| id.clone());
            rows.push(MatrixRow {
                header: RowHeader::alternative(index, id, label),
                values,
            });
        }

        Ok(DecisionMatrix {
            criteria: self.criteria,
            rows,
        })
    }
}

fn validate_id(id: &str, seen: &mut HashSet<String>) -> Result<(), ArasError> {
    if id.trim().is_empty() {
        return Err(ArasError::EmptyField("alternative id"));
    }
    if id == OPTIMAL_ROW_ID {
        return Err(ArasError::ReservedAlternative(id.to_string()));
    }
    if !seen.insert(id.to_string()) {
        return Err(ArasError::DuplicateAlternative(id.to_string()));
    }
    Ok(())
}

/// Raw values must be finite and non-negative.
fn is_admissible(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
