//! Animation error types

use thiserror::Error;

/// Contract violations detected when an animation descriptor is built
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// Duration must be at least one millisecond
    #[error("animation duration must be positive")]
    ZeroDuration,

    /// Explicit start value is NaN or infinite
    #[error("animation start value is not finite")]
    NonFiniteFrom,

    /// End value is NaN or infinite
    #[error("animation end value is not finite")]
    NonFiniteTo,
}

/// Result type for animation construction
pub type Result<T> = std::result::Result<T, AnimationError>;
