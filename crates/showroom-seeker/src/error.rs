//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building filters or search configuration.
///
/// The query pipeline itself never fails; these errors surface at the
/// edges, where raw input is turned into typed filter values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeekerError {
    /// An interval was built with its minimum above its maximum.
    #[error("interval minimum {min} exceeds maximum {max}")]
    InvertedInterval { min: f64, max: f64 },

    /// An interval bound was NaN or infinite.
    #[error("interval bound is not finite: {0}")]
    NonFiniteBound(f64),

    /// A sort key name did not match any known key.
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),

    /// A field name did not match any searchable field.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Fuzzy threshold outside `[0, 1]`.
    #[error("fuzzy threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
