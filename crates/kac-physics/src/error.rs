//! Error types for the membrane synthesis backends.

use thiserror::Error;

/// Result type for physics operations.
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Errors that can occur while building or running a membrane simulation.
///
/// Every variant is raised before any output state is written. Numerical
/// instability is not an error: coefficients outside the stable range simply
/// produce a diverging waveform.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Two fields that must share a shape do not.
    #[error("dimension mismatch: {what} is {found:?}, expected {expected:?}")]
    DimensionMismatch {
        /// Which input disagreed.
        what: &'static str,
        /// Expected (x, y) dimensions.
        expected: (usize, usize),
        /// Found (x, y) dimensions.
        found: (usize, usize),
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A coordinate lies outside the domain it indexes.
    #[error("{what} out of range: {message}")]
    OutOfRange {
        /// What was being indexed.
        what: &'static str,
        /// Error message.
        message: String,
    },

    /// A render recipe could not be parsed.
    #[error("invalid recipe: {0}")]
    Recipe(#[from] serde_json::Error),
}

impl PhysicsError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(what: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            what,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            PhysicsError::DimensionMismatch { .. } => "PHYS_001",
            PhysicsError::InvalidParameter { .. } => "PHYS_002",
            PhysicsError::OutOfRange { .. } => "PHYS_003",
            PhysicsError::Recipe(_) => "PHYS_004",
        }
    }
}

/// Fails with [`PhysicsError::InvalidParameter`] unless `value` is finite and
/// strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> PhysicsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::invalid_param(
            name,
            format!("must be finite and > 0, got {}", value),
        ))
    }
}
