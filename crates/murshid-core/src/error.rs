//! Error types for murshid-core.
//!
//! All engines are pure computations, so the error surface is small:
//! input validation failures, the distribution engine's "no qualified
//! candidate" outcome, and policy (de)serialization problems.

use thiserror::Error;

/// Top-level error type for the decision engines.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An input field failed validation
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Task distribution failed
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// Failed to parse an engine policy from TOML
    #[error("Failed to parse policy TOML: {0}")]
    PolicyParse(#[from] toml::de::Error),

    /// Failed to serialize an engine policy to TOML
    #[error("Failed to serialize policy TOML: {0}")]
    PolicySerialize(#[from] toml::ser::Error),
}

impl EngineError {
    /// Shorthand for a field validation error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Task-distribution-specific errors.
///
/// The no-qualified-candidate message is kept verbatim from the legacy
/// console so existing callers that match on it keep working.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DistributionError {
    /// No candidate passed the qualification filter for a task
    #[error("لا يوجد موظفين مؤهلين لهذه المهمة حالياً")]
    NoQualifiedCandidates,
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
