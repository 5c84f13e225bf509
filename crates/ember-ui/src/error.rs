//! Error types for the widget crate.

use thiserror::Error;

/// Errors from writing a value into a bounds-enforcing range.
///
/// Raised only under strict enforcement; clamping coerces silently instead.
/// The rejected write leaves the stored value untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// The written value exceeds the configured maximum.
    #[error("value {value} is above the maximum {maximum}")]
    AboveMaximum { value: f64, maximum: f64 },

    /// The written value falls below the configured minimum.
    #[error("value {value} is below the minimum {minimum}")]
    BelowMinimum { value: f64, minimum: f64 },
}

/// Errors from mutating a container's child collection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// The container does not accept child mutations.
    #[error("container is read-only")]
    ReadOnly,
}
