#![doc = r#"boost-frames: deterministic frame sequences for boost animations.

For a model (Galilean or Lorentz), a velocity schedule and an ordered set of
time samples, this crate produces one [`Frame`] per sample holding:
- the three registry events transformed into S′,
- the S′ line of simultaneity (horizontal) and the same line drawn in S
  (slope 0 for Galilean, slope v for Lorentz), both through the transformed origin,
- the S coordinate grid as seen from S′.

[`Frames`] is a pure `index → Frame` map wrapped in a restartable iterator;
no state accumulates between frames.

```rust
use boost_core::{Label, Model};
use boost_frames::{generate_frames, TimeSamples};

let samples = TimeSamples::uniform(0.0, 0.5, 4).unwrap();
let frames: Vec<_> = generate_frames(Model::Lorentz, 0.6, &samples).unwrap().collect();
assert_eq!(frames.len(), 4);
let a = frames[0].event(Label::A);
assert!((a.x - 1.25).abs() < 1e-12 && (a.ct + 0.75).abs() < 1e-12);
assert!((frames[0].boosted_line.slope - 0.6).abs() < 1e-15);
```
"#]

pub mod error;
pub mod geometry;
pub mod samples;
pub mod schedule;
pub mod snapshot;

pub use error::{FrameError, InputError};
pub use geometry::{default_grid_values, CoordinateGrid, GridLine, Point, Segment, SimultaneityLine};
pub use samples::{Extent, TimeSamples};
pub use schedule::{Ramp, Schedule};
pub use snapshot::Snapshot;

use boost_core::{interval, pairs, Color, Label, Model, Scalar, Velocity, EVENTS, INTERVAL_TOLERANCE};
use serde::Serialize;

/// A registry event mapped into S′.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransformedEvent {
    pub label: Label,
    pub color: Color,
    /// Coordinates in S.
    pub source: Point,
    pub x: Scalar,
    pub ct: Scalar,
}

impl TransformedEvent {
    #[inline]
    pub fn coords(&self) -> Point {
        (self.x, self.ct)
    }
}

/// Everything one video frame needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub t: Scalar,
    pub model: Model,
    pub v: Velocity,
    /// γ for Lorentz, 1 for Galilean.
    pub gamma: Scalar,
    /// O, A, B in registry order.
    pub events: [TransformedEvent; 3],
    /// S′ simultaneity through O′, in S′ coordinates.
    pub rest_line: SimultaneityLine,
    /// The same S′ simultaneity expressed in S coordinates.
    pub boosted_line: SimultaneityLine,
    pub grid: CoordinateGrid,
}

impl Frame {
    #[inline]
    pub fn event(&self, label: Label) -> &TransformedEvent {
        &self.events[label as usize]
    }

    /// s² between two events in S.
    pub fn interval_s(&self, a: Label, b: Label) -> Scalar {
        interval(self.event(a).source, self.event(b).source)
    }

    /// s² between two events in S′.
    pub fn interval_s_prime(&self, a: Label, b: Label) -> Scalar {
        interval(self.event(a).coords(), self.event(b).coords())
    }

    /// Largest interval change over the registry pairs, scaled by `max(1, |s²|)`.
    pub fn max_interval_drift(&self) -> Scalar {
        pairs()
            .iter()
            .map(|&(a, b)| {
                let s = self.interval_s(a, b);
                (self.interval_s_prime(a, b) - s).abs() / s.abs().max(1.0)
            })
            .fold(0.0, Scalar::max)
    }

    pub fn preserves_intervals(&self) -> bool {
        self.max_interval_drift() <= INTERVAL_TOLERANCE
    }

    pub fn snapshot(&self, label: Label) -> Snapshot {
        let e = self.event(label);
        Snapshot::new(label, e.x, e.ct, self.v, self.gamma)
    }
}

/// Lazy, finite, restartable frame sequence.
#[derive(Clone, Debug)]
pub struct Frames {
    model: Model,
    schedule: Schedule,
    samples: TimeSamples,
    extent: Extent,
    grid_values: Vec<Scalar>,
    next: usize,
}

impl Frames {
    fn new(model: Model, schedule: Schedule, samples: &TimeSamples, extent: Extent) -> Self {
        log::debug!(
            "frame sequence: model={model}, samples={}, t=[{}, {}], schedule={schedule:?}",
            samples.len(),
            samples.as_slice()[0],
            samples.as_slice()[samples.len() - 1],
        );
        Self {
            model,
            schedule,
            samples: samples.clone(),
            extent,
            grid_values: default_grid_values(),
            next: 0,
        }
    }

    /// Replace the S grid values (default -8, -6, …, 8).
    pub fn with_grid_values(mut self, values: Vec<Scalar>) -> Result<Self, InputError> {
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(InputError::BadGridValue { value });
        }
        self.grid_values = values;
        Ok(self)
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn samples(&self) -> &TimeSamples {
        &self.samples
    }

    /// Total number of frames, independent of the cursor.
    #[inline]
    pub fn total(&self) -> usize {
        self.samples.len()
    }

    /// Rewind the cursor to the first frame.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// The frame for sample `index`; `None` past the end.
    pub fn frame_at(&self, index: usize) -> Option<Frame> {
        let t = self.samples.get(index)?;
        let v = self.schedule.velocity_at(index);
        let model = self.model;

        let events = EVENTS.map(|e| {
            let (x, ct) = model.apply(v, e.x, e.ct);
            TransformedEvent { label: e.label, color: e.color, source: e.coords(), x, ct }
        });

        let origin = events[Label::O as usize].coords();
        let rest_line = SimultaneityLine::through(origin, 0.0, self.extent);
        let origin_in_s = model.invert(v, origin.0, origin.1);
        let boosted_line = SimultaneityLine::through(origin_in_s, model.simultaneity_slope(v), self.extent);

        Some(Frame {
            index,
            t,
            model,
            v,
            gamma: model.gamma(v),
            events,
            rest_line,
            boosted_line,
            grid: CoordinateGrid::build(model, v, &self.grid_values, self.extent),
        })
    }
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let frame = self.frame_at(self.next)?;
        log::trace!("frame {} t={} v={}", frame.index, frame.t, frame.v.get());
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.total().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Frames {}

impl std::iter::FusedIterator for Frames {}

/// Constant-velocity sequence over `samples` with the default extent.
pub fn generate_frames(model: Model, v: Scalar, samples: &TimeSamples) -> Result<Frames, FrameError> {
    generate_scheduled(model, Schedule::constant(v)?, samples, Extent::default())
}

/// Sequence whose velocity follows `schedule`, indexed by frame number.
pub fn generate_scheduled(
    model: Model,
    schedule: Schedule,
    samples: &TimeSamples,
    extent: Extent,
) -> Result<Frames, FrameError> {
    Ok(Frames::new(model, schedule, samples, extent))
}
