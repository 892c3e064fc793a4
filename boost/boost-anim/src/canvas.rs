//! Drawing seam: what the renderer asks of a plotting backend.

use boost_core::{Color, Label};
use boost_frames::{Point, Segment};
use serde::Serialize;

/// Panel a primitive belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Spacetime diagram in S′ coordinates.
    SPrime,
    /// Spacetime diagram in S coordinates.
    S,
    /// Physical space along x′ at the time of event B.
    Physical,
    /// Physical space at the S′ time of one event.
    Snapshot(Label),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ink {
    /// S′ (rest) frame, gray.
    SPrime,
    /// S (moving) frame, blue.
    S,
    /// Velocity and length annotations, purple.
    Note,
    Event(Color),
}

impl Ink {
    pub fn name(self) -> &'static str {
        match self {
            Ink::SPrime => "gray",
            Ink::S => "blue",
            Ink::Note => "purple",
            Ink::Event(c) => c.name(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    Grid,
    Axis,
    Tick,
}

pub trait Canvas {
    /// Whatever the backend hands to an encoder once a frame is drawn.
    type Figure: ?Sized;

    fn clear(&mut self);
    fn point(&mut self, axis: Axis, at: Point, ink: Ink, label: &str);
    fn segment(&mut self, axis: Axis, seg: Segment, ink: Ink, weight: Weight);
    fn text(&mut self, axis: Axis, at: Point, text: &str);
    fn figure(&self) -> &Self::Figure;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Point { axis: Axis, at: Point, ink: Ink, label: String },
    Segment { axis: Axis, from: Point, to: Point, ink: Ink, weight: Weight },
    Text { axis: Axis, at: Point, text: String },
}

/// Canvas that records primitives instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn on(&self, axis: Axis) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops.iter().filter(move |op| match op {
            DrawOp::Point { axis: a, .. } | DrawOp::Segment { axis: a, .. } | DrawOp::Text { axis: a, .. } => {
                *a == axis
            }
        })
    }
}

impl Canvas for DrawList {
    type Figure = [DrawOp];

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn point(&mut self, axis: Axis, at: Point, ink: Ink, label: &str) {
        self.ops.push(DrawOp::Point { axis, at, ink, label: label.to_owned() });
    }

    fn segment(&mut self, axis: Axis, seg: Segment, ink: Ink, weight: Weight) {
        self.ops.push(DrawOp::Segment { axis, from: seg.from, to: seg.to, ink, weight });
    }

    fn text(&mut self, axis: Axis, at: Point, text: &str) {
        self.ops.push(DrawOp::Text { axis, at, text: text.to_owned() });
    }

    fn figure(&self) -> &[DrawOp] {
        &self.ops
    }
}
