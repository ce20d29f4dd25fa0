//! Analysis defaults applied when a request does not override them

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::aras::{
    DegenerateColumnPolicy, MissingValuePolicy, PipelineOptions, WeightPolicy,
};

/// ARAS analysis configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Handling of alternatives that lack a value for a criterion
    #[serde(default)]
    pub missing_values: MissingValuePolicy,

    /// Handling of columns that cannot be normalized
    #[serde(default)]
    pub degenerate_columns: DegenerateColumnPolicy,

    /// Advisory weight bounds reported alongside each result
    #[serde(default)]
    pub weight_policy: WeightPolicy,
}

impl AnalysisConfig {
    /// Pipeline options used when a request supplies none
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            missing_values: self.missing_values,
            degenerate_columns: self.degenerate_columns,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let policy = &self.weight_policy;
        if !(0.0..1.0).contains(&policy.sum_tolerance) {
            return Err(ValidationError::InvalidWeightTolerance(policy.sum_tolerance));
        }
        if !(policy.min >= 0.0 && policy.min <= policy.max) {
            return Err(ValidationError::InvalidWeightBounds {
                min: policy.min,
                max: policy.max,
            });
        }
        Ok(())
    }
}
