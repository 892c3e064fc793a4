//! Frame loop: render each frame and hand it to the encoder in order.

use boost_frames::{Frame, FrameError};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::config::AnimationConfig;
use crate::encoder::{EncodeError, Encoder};
use crate::preset::Animation;
use crate::render::render_frame;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("frame {got} delivered out of order, expected frame {expected}")]
    OutOfOrder { expected: usize, got: usize },

    #[error("encoder failed at frame {index}")]
    Encode {
        index: usize,
        #[source]
        source: EncodeError,
    },
}

pub struct Driver<'a> {
    animation: Animation,
    config: &'a AnimationConfig,
}

impl<'a> Driver<'a> {
    pub fn new(animation: Animation, config: &'a AnimationConfig) -> Self {
        Self { animation, config }
    }

    /// Render and encode every frame. Indices must run 0, 1, 2, … without
    /// gaps; the first violation aborts the run. Returns the frame count.
    pub fn run<I, C, E>(&self, frames: I, canvas: &mut C, encoder: &mut E) -> Result<usize, DriveError>
    where
        I: IntoIterator<Item = Frame>,
        C: Canvas,
        E: Encoder<C::Figure>,
    {
        let mut expected = 0usize;
        for frame in frames {
            if frame.index != expected {
                return Err(DriveError::OutOfOrder { expected, got: frame.index });
            }
            canvas.clear();
            render_frame(self.animation, &frame, self.config, canvas);
            encoder
                .push(frame.index, canvas.figure())
                .map_err(|source| DriveError::Encode { index: frame.index, source })?;
            expected += 1;
        }
        encoder
            .finish()
            .map_err(|source| DriveError::Encode { index: expected, source })?;
        log::info!("{}: encoded {expected} frames", self.animation.video_name());
        Ok(expected)
    }
}
