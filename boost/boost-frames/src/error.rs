//! Crate-level error types for boost-frames.

use boost_core::{DomainError, Scalar};
use thiserror::Error;

/// Malformed generator input. Raised before any frame is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("time sample sequence is empty")]
    Empty,

    #[error("time sample {index} is not finite: {value}")]
    NotFinite { index: usize, value: Scalar },

    #[error("time samples must strictly increase: t[{index}] = {next} does not follow {prev}")]
    NotIncreasing { index: usize, prev: Scalar, next: Scalar },

    #[error("uniform time step must be finite and positive, got {step}")]
    BadStep { step: Scalar },

    #[error("spatial extent [{x_min}, {x_max}] is empty or not finite")]
    BadExtent { x_min: Scalar, x_max: Scalar },

    #[error("velocity ramp needs at least 2 ramp frames, got {ramp_frames}")]
    BadRamp { ramp_frames: usize },

    #[error("grid value {value} is not finite")]
    BadGridValue { value: Scalar },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FrameError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),
}
