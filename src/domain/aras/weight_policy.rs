//! Weight policy - advisory checks on weight totals and bounds.
//!
//! The pipeline never rescales weights. These checks only report on the
//! configuration so a caller can warn before (or instead of) running.

use serde::{Deserialize, Serialize};

use super::CriterionConfig;

/// Bounds and tolerance the caller wants weights to respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPolicy {
    /// Smallest expected weight per criterion.
    #[serde(default = "default_min")]
    pub min: f64,
    /// Largest expected weight per criterion.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Allowed distance of the total from 1.0.
    #[serde(default = "default_sum_tolerance")]
    pub sum_tolerance: f64,
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    0.5
}

fn default_sum_tolerance() -> f64 {
    0.001
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            sum_tolerance: default_sum_tolerance(),
        }
    }
}

/// Outcome of a weight policy check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightSummary {
    pub total: f64,
    /// True when the total is within tolerance of 1.0.
    pub balanced: bool,
    /// Criteria whose weight falls outside `[min, max]`.
    pub out_of_bounds: Vec<String>,
}

impl WeightSummary {
    pub fn is_clean(&self) -> bool {
        self.balanced && self.out_of_bounds.is_empty()
    }
}

impl WeightPolicy {
    /// Reports the total weight and any per-criterion bound violations.
    pub fn check(&self, config: &CriterionConfig) -> WeightSummary {
        let total = config.total_weight();
        let out_of_bounds = config
            .criteria()
            .iter()
            .filter(|c| c.weight < self.min || c.weight > self.max)
            .map(|c| c.name.clone())
            .collect();

        WeightSummary {
            total,
            balanced: (total - 1.0).abs() <= self.sum_tolerance,
            out_of_bounds,
        }
    }
}
