//! Unified error hierarchy for Pacer
//!
//! Parsing and calculation failures are reported as typed values that keep
//! the offending raw input, so callers can print an actionable message and
//! decide whether to retry.

use thiserror::Error;

/// Top-level error type for all Pacer operations
#[derive(Debug, Error)]
pub enum PacerError {
    /// Measurement parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Conversion algebra errors
    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PacerError>;

/// Failure category, for callers that branch on the kind of problem rather
/// than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wrong shape: too many colon fields, missing unit suffix
    Format,
    /// Non-numeric content where digits were expected
    Numeric,
    /// Value outside the allowed range
    Range,
}

/// Measurement parsing errors
///
/// Each variant carries the raw text (or the value derived from it) that
/// triggered the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Menu selection was not a plain digit string
    #[error("Input '{input}' is not a valid number!")]
    NotANumber { input: String },

    /// Menu selection parsed to an integer with no matching option
    #[error("Chosen option {id} is not a valid option!")]
    NotAnOption { id: u64 },

    /// Duration had more than three colon-separated fields
    #[error("Given duration contains too many fields ({count}). Please use format: 'HH:MM:SS'")]
    TooManyFields { count: usize },

    /// Duration field contained a non-digit character or no digits at all
    #[error("Given duration '{input}' can't be parsed to a duration! Please use format: 'HH:MM:SS'")]
    MalformedDuration { input: String },

    /// Minutes or seconds field of a multi-field duration was 60 or more
    #[error("{field} in duration must be in range 0-59 (got {value})")]
    FieldOutOfRange { field: &'static str, value: u64 },

    /// Distance had no recognized unit suffix and matched no alias
    #[error("Given distance '{input}' can't be parsed to a distance! Please use format: '<number><unit>' where unit is 'km', 'k' or 'm'.")]
    MissingDistanceUnit { input: String },

    /// Distance had a unit suffix but nothing in front of it
    #[error("Given distance '{input}' contains no numeric value! Please use format: '<number><unit>' where unit is 'km', 'k' or 'm'.")]
    DistanceWithoutNumber { input: String },

    /// Distance magnitude was not a decimal number
    #[error("Given distance '{input}' contains invalid numeric value '{numeric}'! Please use a valid number with unit 'km', 'k' or 'm'.")]
    InvalidDistanceNumber { input: String, numeric: String },

    /// Distance magnitude was negative
    #[error("Distance cannot be negative: {value}")]
    NegativeDistance { value: f64 },

    /// Pace had no trailing '/km' or '/m' qualifier
    #[error("Given pace '{input}' can't be parsed to a pace! Please use format: '<duration>[ min| sec]/km' or '.../m'")]
    MissingPaceUnit { input: String },

    /// Pace time expression failed the duration parsing step
    #[error("Given pace '{input}' can't be parsed to a pace: {source}")]
    MalformedPace {
        input: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseError::NotANumber { .. } => ErrorCategory::Numeric,
            ParseError::NotAnOption { .. } => ErrorCategory::Range,
            ParseError::TooManyFields { .. } => ErrorCategory::Format,
            ParseError::MalformedDuration { .. } => ErrorCategory::Numeric,
            ParseError::FieldOutOfRange { .. } => ErrorCategory::Range,
            ParseError::MissingDistanceUnit { .. } => ErrorCategory::Format,
            ParseError::DistanceWithoutNumber { .. } => ErrorCategory::Format,
            ParseError::InvalidDistanceNumber { .. } => ErrorCategory::Numeric,
            ParseError::NegativeDistance { .. } => ErrorCategory::Range,
            ParseError::MissingPaceUnit { .. } => ErrorCategory::Format,
            ParseError::MalformedPace { source, .. } => source.category(),
        }
    }
}

/// Conversion algebra errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Distance must be strictly positive to derive a pace
    #[error("Distance must be greater than zero (got {value} m)")]
    NonPositiveDistance { value: f64 },

    /// Pace must be strictly positive to derive duration or distance
    #[error("Pace must be greater than zero (got {value} sec/m)")]
    NonPositivePace { value: f64 },

    /// Negative duration passed to the algebra
    #[error("Duration cannot be negative (got {value} sec)")]
    NegativeDuration { value: f64 },

    /// Negative distance passed to the algebra
    #[error("Distance cannot be negative (got {value} m)")]
    NegativeDistance { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_categories() {
        let err = ParseError::TooManyFields { count: 4 };
        assert_eq!(err.category(), ErrorCategory::Format);

        let err = ParseError::NegativeDistance { value: -5.0 };
        assert_eq!(err.category(), ErrorCategory::Range);

        let err = ParseError::NotANumber {
            input: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Numeric);
    }

    #[test]
    fn test_pace_error_inherits_source_category() {
        let err = ParseError::MalformedPace {
            input: "x:y min/km".to_string(),
            source: Box::new(ParseError::MalformedDuration {
                input: "x:y".to_string(),
            }),
        };
        assert_eq!(err.category(), ErrorCategory::Numeric);

        let err = ParseError::MalformedPace {
            input: "5:70 min/km".to_string(),
            source: Box::new(ParseError::FieldOutOfRange {
                field: "Seconds",
                value: 70,
            }),
        };
        assert_eq!(err.category(), ErrorCategory::Range);
    }

    #[test]
    fn test_error_messages_name_the_input() {
        let err = ParseError::NotANumber {
            input: "1.5".to_string(),
        };
        assert!(err.to_string().contains("'1.5'"));

        let err = ParseError::InvalidDistanceNumber {
            input: "abckm".to_string(),
            numeric: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abckm'"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_top_level_conversions() {
        let err: PacerError = ParseError::TooManyFields { count: 5 }.into();
        assert!(matches!(err, PacerError::Parse(_)));

        let err: PacerError = CalcError::NonPositivePace { value: 0.0 }.into();
        assert!(matches!(err, PacerError::Calc(_)));
    }
}
