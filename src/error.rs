//! Error types for the recommendation core.
//!
//! The core has no I/O, so its only fallible conditions are caller
//! configuration mistakes. Data-sparsity conditions (missing antecedent
//! support, zero candidates) are not errors and are handled in-band.

/// Errors produced by engine configuration and invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A support or confidence threshold lies outside (0, 1].
    ///
    /// Thresholds are rejected rather than clamped: silent clamping would
    /// produce misleading statistics.
    #[error("invalid {param}: {value}, expected a finite fraction in (0, 1]")]
    InvalidThreshold {
        /// Parameter name (`min_support` or `min_confidence`)
        param: &'static str,
        /// Value supplied by the caller
        value: f64,
    },

    /// The recommendation limit was zero.
    #[error("recommendation limit must be greater than zero")]
    ZeroLimit,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
