//! Error types for the slider crate.

use showroom_seeker::SeekerError;
use thiserror::Error;

/// Errors raised while configuring a [`RangeSlider`](crate::RangeSlider).
///
/// Pointer handling never fails once a slider exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The step size was zero, negative or not finite.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    /// The track had no usable width.
    #[error("track width must be positive and finite, got {0}")]
    DegenerateTrack(f64),

    #[error(transparent)]
    Seeker(#[from] SeekerError),
}

/// Result type for slider operations.
pub type Result<T> = std::result::Result<T, SliderError>;
