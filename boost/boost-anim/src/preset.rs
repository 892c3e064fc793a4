//! The three course animations.

use boost_core::{Model, Scalar};
use boost_frames::{generate_scheduled, FrameError, Frames, Ramp, Schedule};

use crate::config::AnimationConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Animation {
    /// Galilean spacetime diagram alone.
    #[value(name = "galilean")]
    GalileanSingle,
    /// Galilean spacetime diagram next to physical space.
    GalileanTwoPanel,
    /// Lorentz spacetime diagram next to per-event physical-space snapshots.
    LorentzTwoPanel,
}

impl Animation {
    pub const ALL: [Animation; 3] =
        [Animation::GalileanSingle, Animation::GalileanTwoPanel, Animation::LorentzTwoPanel];

    pub fn model(self) -> Model {
        match self {
            Animation::GalileanSingle | Animation::GalileanTwoPanel => Model::Galilean,
            Animation::LorentzTwoPanel => Model::Lorentz,
        }
    }

    /// (pause frames, ramp frames). The Lorentz ramp is three times slower so
    /// the tilt develops gradually.
    pub fn timing(self) -> (usize, usize) {
        match self {
            Animation::GalileanSingle | Animation::GalileanTwoPanel => (36, 401),
            Animation::LorentzTwoPanel => (108, 1203),
        }
    }

    pub fn stem(self) -> &'static str {
        match self {
            Animation::GalileanSingle => "galilean_animation",
            Animation::GalileanTwoPanel => "galilean_twopanel_animation",
            Animation::LorentzTwoPanel => "lorentz_twopanel_animation",
        }
    }

    /// Name of the video an encoder produces from this animation.
    pub fn video_name(self) -> String {
        format!("{}.mp4", self.stem())
    }

    /// Name of the JSON-lines frame stream.
    pub fn stream_name(self) -> String {
        format!("{}.jsonl", self.stem())
    }

    pub fn title(self) -> &'static str {
        match self {
            Animation::GalileanSingle => "Galilean Transformation of Coordinates",
            Animation::GalileanTwoPanel | Animation::LorentzTwoPanel => "Spacetime Diagram (S' Frame)",
        }
    }

    /// Frame sequence for this animation: the ramp by default, or a constant
    /// `velocity`; `limit` caps the frame count.
    pub fn frames(
        self,
        config: &AnimationConfig,
        velocity: Option<Scalar>,
        limit: Option<usize>,
    ) -> Result<Frames, FrameError> {
        let (pause, ramp_frames) = self.timing();
        let schedule = match velocity {
            Some(v) => Schedule::constant(v)?,
            None => Schedule::Ramp(Ramp::new(pause, ramp_frames, config.v_max)?),
        };
        let count = limit.unwrap_or(pause + ramp_frames);
        let samples = config.time_samples(count)?;
        let frames = generate_scheduled(self.model(), schedule, &samples, config.extent()?)?;
        Ok(frames.with_grid_values(config.grid_values.clone())?)
    }
}
