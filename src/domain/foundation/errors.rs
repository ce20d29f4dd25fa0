//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,

    // Configuration errors
    DuplicateCriterion,
    UnknownCriterion,
    InvalidWeight,
    WeightsLocked,
    CriteriaLocked,

    // Matrix shape errors
    EmptyMatrix,
    DuplicateAlternative,
    ReservedAlternative,
    MissingValue,
    InvalidValue,
    MissingWeight,

    // Arithmetic errors
    DivisionByZero,
    DegenerateOptimum,

    // Infrastructure errors
    PresetUnavailable,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::DuplicateCriterion => "DUPLICATE_CRITERION",
            ErrorCode::UnknownCriterion => "UNKNOWN_CRITERION",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::WeightsLocked => "WEIGHTS_LOCKED",
            ErrorCode::CriteriaLocked => "CRITERIA_LOCKED",
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::DuplicateAlternative => "DUPLICATE_ALTERNATIVE",
            ErrorCode::ReservedAlternative => "RESERVED_ALTERNATIVE",
            ErrorCode::MissingValue => "MISSING_VALUE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::MissingWeight => "MISSING_WEIGHT",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::DegenerateOptimum => "DEGENERATE_OPTIMUM",
            ErrorCode::PresetUnavailable => "PRESET_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let ValidationError::EmptyField { field } = &err;
        let field = field.clone();
        DomainError::new(ErrorCode::EmptyField, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("criterion name");
        assert_eq!(format!("{}", err), "Field 'criterion name' cannot be empty");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::EmptyMatrix, "No alternatives supplied");
        assert_eq!(format!("{}", err), "[EMPTY_MATRIX] No alternatives supplied");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::DivisionByZero, "Degenerate column")
            .with_detail("criterion", "Price")
            .with_detail("reason", "zero cost value");

        assert_eq!(err.details.get("criterion"), Some(&"Price".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"zero cost value".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_field() {
        let err: DomainError = ValidationError::empty_field("alternative id").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"alternative id".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DegenerateOptimum), "DEGENERATE_OPTIMUM");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
        assert_eq!(
            format!("{}", ErrorCode::ReservedAlternative),
            "RESERVED_ALTERNATIVE"
        );
    }
}
