//! Aggregation error types.
//!
//! Every failure here is local to one calculation: the aggregator declines to
//! produce a number and reports why. Nothing is retained between calls.

use thiserror::Error;

/// Errors returned by the grade aggregator and its input parsers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GpaError {
    /// Total weight (current credits plus prior credits) is zero.
    #[error("total credit is zero, cannot compute a weighted average")]
    DivisionByZero,

    /// The value and credit sequences differ in length.
    #[error("got {values} values but {credits} credits")]
    LengthMismatch { values: usize, credits: usize },

    /// A numeric input fell outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A quantity that must not be negative was.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// An input or the computed average is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// Too few or too many subjects for one calculation.
    #[error("number of subjects must be between 1 and {max}, got {count}")]
    SubjectCount { count: usize, max: usize },

    /// A grade symbol outside the fixed scale.
    #[error("unknown grade symbol {0:?} (expected one of O, A+, A, B+, B, C)")]
    UnknownGrade(String),

    /// A `VALUE:CREDIT` pair that could not be parsed.
    #[error("invalid subject {0:?}, expected VALUE:CREDIT")]
    InvalidPair(String),
}

impl GpaError {
    /// Returns `true` if the error comes from the inputs being out of bounds
    /// rather than from the arithmetic itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            GpaError::DivisionByZero | GpaError::NonFinite { field: "result", .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_not_input_error() {
        assert!(!GpaError::DivisionByZero.is_input_error());
        assert!(GpaError::UnknownGrade("Z".into()).is_input_error());
        assert!(
            GpaError::NonFinite {
                field: "credit",
                value: f64::NAN
            }
            .is_input_error()
        );
        assert!(
            !GpaError::NonFinite {
                field: "result",
                value: f64::INFINITY
            }
            .is_input_error()
        );
    }

    #[test]
    fn test_invalid_range_message() {
        let err = GpaError::InvalidRange {
            field: "marks",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "marks must be between 0 and 100, got 120");
    }
}
