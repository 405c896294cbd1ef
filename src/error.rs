//! Error types for the shift schedule engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can occur while building or querying schedules.

use thiserror::Error;

/// The main error type for the shift schedule engine.
///
/// Every fallible operation in the crate returns this error type. None of
/// these are transient: each one signals malformed input data or a misuse of
/// the schedule API, and the target object is left unchanged.
///
/// # Example
///
/// ```
/// use shift_schedule::error::ScheduleError;
///
/// let error = ScheduleError::ConfigNotFound {
///     path: "/missing/meal_policy.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/meal_policy.yaml"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Textual time, hour range or week range input was malformed.
    #[error("Invalid format '{input}': {message}")]
    InvalidFormat {
        /// The offending input text.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A numeric value fell outside its valid interval.
    #[error("Value {value} out of range: {message}")]
    OutOfRange {
        /// The offending value, rendered as text.
        value: String,
        /// A description of the valid interval.
        message: String,
    },

    /// A fixed-capacity container was already full.
    #[error("Capacity of {capacity} exceeded: {message}")]
    CapacityExceeded {
        /// The maximum number of entries allowed.
        capacity: usize,
        /// A description of the rejected insertion.
        message: String,
    },

    /// The operation is not allowed in the current state of the schedule.
    #[error("Invalid schedule state: {message}")]
    InvalidState {
        /// A description of the state conflict.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ScheduleError {
    pub(crate) fn format(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            message: message.into(),
        }
    }

    pub(crate) fn range(value: impl ToString, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
