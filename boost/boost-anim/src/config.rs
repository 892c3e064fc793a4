//! Animation configuration.
//!
//! There is no configuration file: defaults mirror the course animations and
//! the CLI overrides individual fields.

use std::path::PathBuf;

use boost_core::Scalar;
use boost_frames::{Extent, InputError, TimeSamples};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Playback rate; time samples are spaced `1/fps` seconds apart
    pub fps: u32,

    /// Half-width of the spacetime panels (both axes)
    pub spacetime_limit: Scalar,

    /// Half-width of the span over which lines are sampled; wider than the panel
    pub line_extent: Scalar,

    /// Coordinate values of the drawn grid lines
    pub grid_values: Vec<Scalar>,

    /// Physical-space panel limits
    pub spatial_xlim: (Scalar, Scalar),
    pub spatial_ylim: (Scalar, Scalar),

    /// Final velocity of the ramp (fraction of c)
    pub v_max: Scalar,

    /// Directory receiving the frame streams
    pub out_dir: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 12,
            spacetime_limit: 10.0,
            line_extent: 15.0,
            grid_values: boost_frames::default_grid_values(),
            spatial_xlim: (-3.5, 3.5),
            spatial_ylim: (-2.5, 2.5),
            v_max: 0.99,
            out_dir: PathBuf::from("."),
        }
    }
}

impl AnimationConfig {
    pub fn extent(&self) -> Result<Extent, InputError> {
        Extent::new(-self.line_extent, self.line_extent)
    }

    /// `count` playback timestamps starting at zero.
    pub fn time_samples(&self, count: usize) -> Result<TimeSamples, InputError> {
        TimeSamples::uniform(0.0, 1.0 / self.fps as Scalar, count)
    }
}
