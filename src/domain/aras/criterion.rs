//! Criterion configuration - the ordered, weighted criterion set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ArasError;

/// Whether a higher or a lower raw value is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Higher is better; the optimum is the column maximum.
    Benefit,
    /// Lower is better; the optimum is the column minimum.
    Cost,
}

impl CriterionDirection {
    pub fn label(&self) -> &'static str {
        match self {
            CriterionDirection::Benefit => "Benefit",
            CriterionDirection::Cost => "Cost",
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub direction: CriterionDirection,
    pub weight: f64,
}

impl Criterion {
    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            direction: CriterionDirection::Benefit,
            weight,
        }
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            direction: CriterionDirection::Cost,
            weight,
        }
    }

    pub fn is_benefit(&self) -> bool {
        self.direction == CriterionDirection::Benefit
    }
}

/// Which edits a configuration accepts.
///
/// Covers the fixed-criteria and fixed-weights flavours of the
/// decision form without duplicating the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPolicy {
    #[serde(default)]
    pub weights_locked: bool,
    #[serde(default)]
    pub criteria_locked: bool,
}

impl EditPolicy {
    /// Both weights and the criterion set are fixed.
    pub fn frozen() -> Self {
        Self {
            weights_locked: true,
            criteria_locked: true,
        }
    }
}

/// Ordered set of criteria, owned by the caller between runs.
///
/// The insertion order is the column order of every matrix the
/// pipeline produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CriterionConfig {
    criteria: Vec<Criterion>,
    policy: EditPolicy,
}

impl CriterionConfig {
    /// Creates an empty, fully editable configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from a list, rejecting duplicates and bad weights.
    pub fn from_criteria(criteria: impl IntoIterator<Item = Criterion>) -> Result<Self, ArasError> {
        let mut config = Self::new();
        for criterion in criteria {
            config.add(criterion.name, criterion.direction, criterion.weight)?;
        }
        Ok(config)
    }

    /// Returns a copy carrying the given edit policy.
    pub fn with_policy(mut self, policy: EditPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: EditPolicy) {
        self.policy = policy;
    }

    /// Appends a criterion.
    ///
    /// # Errors
    /// - `CriteriaLocked` if the set is fixed
    /// - `EmptyField` for a blank name
    /// - `DuplicateCriterion` if the name is taken
    /// - `InvalidWeight` for negative or non-finite weights
    pub fn add(
        &mut self,
        name: impl Into<String>,
        direction: CriterionDirection,
        weight: f64,
    ) -> Result<(), ArasError> {
        if self.policy.criteria_locked {
            return Err(ArasError::CriteriaLocked);
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArasError::EmptyField("criterion name"));
        }
        if self.position(&name).is_some() {
            return Err(ArasError::DuplicateCriterion(name));
        }
        validate_weight(&name, weight)?;

        self.criteria.push(Criterion {
            name,
            direction,
            weight,
        });
        Ok(())
    }

    /// Removes a criterion and returns it.
    pub fn remove(&mut self, name: &str) -> Result<Criterion, ArasError> {
        if self.policy.criteria_locked {
            return Err(ArasError::CriteriaLocked);
        }

        let index = self
            .position(name)
            .ok_or_else(|| ArasError::UnknownCriterion(name.to_string()))?;
        Ok(self.criteria.remove(index))
    }

    /// Replaces the weight of an existing criterion.
    ///
    /// No upper bound is enforced; see `WeightPolicy` for advisory limits.
    pub fn set_weight(&mut self, name: &str, weight: f64) -> Result<(), ArasError> {
        if self.policy.weights_locked {
            return Err(ArasError::WeightsLocked);
        }

        let index = self
            .position(name)
            .ok_or_else(|| ArasError::UnknownCriterion(name.to_string()))?;
        validate_weight(name, weight)?;
        self.criteria[index].weight = weight;
        Ok(())
    }

    /// Sum of all configured weights.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn direction_of(&self, name: &str) -> Option<CriterionDirection> {
        self.get(name).map(|c| c.direction)
    }

    /// Criterion names in column order.
    pub fn names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Weights keyed by criterion name.
    pub fn weights(&self) -> HashMap<String, f64> {
        self.criteria
            .iter()
            .map(|c| (c.name.clone(), c.weight))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }
}

fn validate_weight(name: &str, weight: f64) -> Result<(), ArasError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ArasError::InvalidWeight {
            criterion: name.to_string(),
            weight,
        });
    }
    Ok(())
}
