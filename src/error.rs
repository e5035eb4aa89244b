//! Error types for the payroll deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while validating requests, looking up
//! employees, storing payroll records, or loading configuration.

use thiserror::Error;

/// The main error type for the payroll deduction engine.
///
/// The calculators themselves never fail; these errors come from request
/// validation, directory lookups, the payroll store and configuration loading.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     entity: "Employee",
///     id: 99999,
/// };
/// assert_eq!(error.to_string(), "Employee with id=99999 does not exist");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A monetary input was malformed and rejected before calculation.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that carried the malformed value.
        field: String,
        /// A description of what was wrong with the value.
        message: String,
    },

    /// A referenced record is absent, or the employee is inactive.
    #[error("{entity} with id={id} does not exist")]
    NotFound {
        /// The kind of record that was looked up.
        entity: &'static str,
        /// The identifier that was looked up.
        id: u64,
    },

    /// A request field was well-formed but outside its allowed range.
    #[error("Validation failed for '{field}': {message}")]
    ValidationError {
        /// The field that failed validation.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// The backing store could not complete an operation.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a `ValidationError`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error means the referenced record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
