//! Velocity schedules: which boost velocity each frame index uses.

use boost_core::{Scalar, Velocity};
use serde::Serialize;

use crate::error::{FrameError, InputError};

/// Linear velocity ramp.
///
/// Frames `0..pause` sit at rest, then the velocity rises linearly and
/// reaches `v_max` at frame `pause + ramp_frames - 1`, holding it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ramp {
    pause: usize,
    ramp_frames: usize,
    v_max: Velocity,
}

impl Ramp {
    pub fn new(pause: usize, ramp_frames: usize, v_max: Scalar) -> Result<Self, FrameError> {
        let v_max = Velocity::new(v_max)?;
        if ramp_frames < 2 {
            return Err(InputError::BadRamp { ramp_frames }.into());
        }
        Ok(Self { pause, ramp_frames, v_max })
    }

    #[inline]
    pub fn velocity_at(&self, frame: usize) -> Velocity {
        let k = frame.saturating_sub(self.pause);
        self.v_max.scaled(k as Scalar / (self.ramp_frames - 1) as Scalar)
    }

    /// Pause plus ramp: the frame count of a full playback.
    #[inline]
    pub fn total_frames(&self) -> usize {
        self.pause + self.ramp_frames
    }

    pub fn pause(&self) -> usize {
        self.pause
    }

    pub fn v_max(&self) -> Velocity {
        self.v_max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schedule {
    Constant { v: Velocity },
    Ramp(Ramp),
}

impl Schedule {
    pub fn constant(v: Scalar) -> Result<Self, FrameError> {
        Ok(Schedule::Constant { v: Velocity::new(v)? })
    }

    #[inline]
    pub fn velocity_at(&self, frame: usize) -> Velocity {
        match self {
            Schedule::Constant { v } => *v,
            Schedule::Ramp(r) => r.velocity_at(frame),
        }
    }
}
