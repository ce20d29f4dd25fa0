//! ARAS Module - Additive Ratio Assessment ranking of alternatives.
//!
//! A caller supplies weighted benefit/cost criteria and a set of
//! alternatives; the module ranks the alternatives by their utility degree
//! relative to a synthetic optimal alternative.
//!
//! # Components
//!
//! - `CriterionConfig` - Ordered, weighted criteria with edit locks
//! - `DecisionMatrix` - Alternative x criterion value table
//! - `OptimalRowDeriver` - Best value per criterion, prepended as row 0
//! - `Normalizer` - Benefit `x/Σx`, cost `(1/x)/Σ(1/x)`
//! - `WeightedAggregator` - Weighting and row sums (Si)
//! - `UtilityRanker` - Ki = Si / S0 and the stable descending order
//! - `ArasPipeline` - Runs the stages end to end
//! - `ArasReport` - Every intermediate table plus the conclusion
//!
//! # Design Philosophy
//!
//! Every stage is a pure function over immutable tables. The same input
//! always yields the same ranking, and no state survives between runs.

mod criterion;
mod decision_matrix;
mod errors;
mod normalizer;
mod optimal_row;
mod pipeline;
mod preset;
mod report;
mod utility_ranker;
mod weight_policy;
mod weighted_aggregator;

// Re-export all public types
pub use criterion::{Criterion, CriterionConfig, CriterionDirection, EditPolicy};
pub use decision_matrix::{
    Alternative, DecisionMatrix, DecisionMatrixBuilder, MatrixRow, MissingValuePolicy, RowHeader,
    OPTIMAL_ROW_CODE, OPTIMAL_ROW_ID, OPTIMAL_ROW_LABEL,
};
pub use errors::{ArasError, DegenerateReason};
pub use normalizer::{DegenerateColumnPolicy, NormalizedMatrix, Normalizer};
pub use optimal_row::{ExtendedMatrix, OptimalRow, OptimalRowDeriver};
pub use pipeline::{ArasOutcome, ArasPipeline, PipelineOptions};
pub use preset::{Preset, PresetError};
pub use report::{ArasReport, BestAlternative, WeightedReportRow};
pub use utility_ranker::{RankedResult, ScoreRow, UtilityRanker};
pub use weight_policy::{WeightPolicy, WeightSummary};
pub use weighted_aggregator::{OptimalityScores, WeightedAggregator, WeightedMatrix, WeightedRow};
