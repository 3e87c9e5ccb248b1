//! Error types for the bonus engine.
//!
//! The pool calculation itself is total over its inputs and never fails.
//! These errors come from loading the bonus policy and from validating
//! requests before they reach the engine.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the bonus engine.
///
/// # Example
///
/// ```
/// use bonus_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A policy value was outside its allowed range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Monthly revenue must be strictly positive and below the request ceiling.
    #[error("Invalid total revenue {value}: {message}")]
    InvalidRevenue {
        /// The rejected revenue value.
        value: Decimal,
        /// Which bound the value broke.
        message: String,
    },

    /// Pool percentage must lie within 0 to 100 inclusive.
    #[error("Pool percentage must be between 0 and 100, got {value}")]
    InvalidPoolPercentage {
        /// The rejected percentage.
        value: Decimal,
    },

    /// An input record carried an invalid value.
    #[error("Invalid {kind} '{id}': {message}")]
    InvalidRecord {
        /// The kind of record (e.g. "damage", "mileage entry").
        kind: String,
        /// The ID of the offending record.
        id: String,
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
