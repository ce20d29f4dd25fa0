//! Errors raised by the ARAS pipeline and its configuration model.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Why a normalization column could not be divided out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// A cost criterion holds an exact zero, so its reciprocal is undefined.
    ZeroCostValue,
    /// A benefit column sums to zero.
    ZeroColumnSum,
    /// A benefit column sum exceeds the range of `f64`.
    ColumnSumOverflow,
    /// The reciprocals of a cost column sum to zero or overflow.
    ZeroReciprocalSum,
}

impl DegenerateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegenerateReason::ZeroCostValue => "cost criterion has a zero value",
            DegenerateReason::ZeroColumnSum => "benefit column sums to zero",
            DegenerateReason::ColumnSumOverflow => "benefit column sum overflows",
            DegenerateReason::ZeroReciprocalSum => "cost column reciprocals do not sum to a usable value",
        }
    }
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while configuring criteria or running the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArasError {
    #[error("Decision matrix has no alternatives")]
    EmptyMatrix,

    #[error("Criterion '{0}' already exists")]
    DuplicateCriterion(String),

    #[error("Criterion '{0}' is not configured")]
    UnknownCriterion(String),

    #[error("No weight configured for criterion '{0}'")]
    MissingWeight(String),

    #[error("Cannot normalize criterion '{criterion}': {reason}")]
    DivisionByZero {
        criterion: String,
        reason: DegenerateReason,
    },

    #[error("Optimal alternative score is {s0}; utility degrees are undefined")]
    DegenerateOptimum { s0: f64 },

    #[error("Alternative '{alternative}' has no value for criterion '{criterion}'")]
    MissingValue {
        alternative: String,
        criterion: String,
    },

    #[error("Alternative '{alternative}' has a negative or non-finite value for criterion '{criterion}'")]
    InvalidValue {
        alternative: String,
        criterion: String,
    },

    #[error("Weight for criterion '{criterion}' must be a finite number >= 0, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("Alternative '{0}' appears more than once")]
    DuplicateAlternative(String),

    #[error("Alternative id '{0}' is reserved for the optimal row")]
    ReservedAlternative(String),

    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Criterion weights are locked")]
    WeightsLocked,

    #[error("Criterion set is locked")]
    CriteriaLocked,
}

impl ArasError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ArasError::EmptyMatrix => ErrorCode::EmptyMatrix,
            ArasError::DuplicateCriterion(_) => ErrorCode::DuplicateCriterion,
            ArasError::UnknownCriterion(_) => ErrorCode::UnknownCriterion,
            ArasError::MissingWeight(_) => ErrorCode::MissingWeight,
            ArasError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            ArasError::DegenerateOptimum { .. } => ErrorCode::DegenerateOptimum,
            ArasError::MissingValue { .. } => ErrorCode::MissingValue,
            ArasError::InvalidValue { .. } => ErrorCode::InvalidValue,
            ArasError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            ArasError::DuplicateAlternative(_) => ErrorCode::DuplicateAlternative,
            ArasError::ReservedAlternative(_) => ErrorCode::ReservedAlternative,
            ArasError::EmptyField(_) => ErrorCode::EmptyField,
            ArasError::WeightsLocked => ErrorCode::WeightsLocked,
            ArasError::CriteriaLocked => ErrorCode::CriteriaLocked,
        }
    }

    /// The criterion this error concerns, if any.
    pub fn criterion(&self) -> Option<&str> {
        match self {
            ArasError::DuplicateCriterion(name)
            | ArasError::UnknownCriterion(name)
            | ArasError::MissingWeight(name) => Some(name),
            ArasError::DivisionByZero { criterion, .. }
            | ArasError::MissingValue { criterion, .. }
            | ArasError::InvalidValue { criterion, .. }
            | ArasError::InvalidWeight { criterion, .. } => Some(criterion),
            _ => None,
        }
    }
}

impl From<ArasError> for DomainError {
    fn from(err: ArasError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        if let Some(criterion) = err.criterion() {
            domain = domain.with_detail("criterion", criterion);
        }
        match &err {
            ArasError::MissingValue { alternative, .. }
            | ArasError::InvalidValue { alternative, .. } => {
                domain = domain.with_detail("alternative", alternative.clone());
            }
            ArasError::DuplicateAlternative(alternative)
            | ArasError::ReservedAlternative(alternative) => {
                domain = domain.with_detail("alternative", alternative.clone());
            }
            ArasError::DivisionByZero { reason, .. } => {
                domain = domain.with_detail("reason", reason.as_str());
            }
            _ => {}
        }
        domain
    }
}
