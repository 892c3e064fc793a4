//! Physical-space snapshots: where S sits along the x′ axis at the instant
//! an event happens in S′.

use boost_core::{Label, Scalar, Velocity};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub label: Label,
    /// S′ time of the event; the snapshot is taken then.
    pub ct: Scalar,
    /// S′ position of the event.
    pub x: Scalar,
    /// S′ position of the S origin at that time, `-v·ct′`.
    pub s_origin: Scalar,
    /// Spacing of unit ticks on the moving S ruler: 1/γ (1 without contraction).
    pub tick_spacing: Scalar,
}

impl Snapshot {
    pub fn new(label: Label, x: Scalar, ct: Scalar, v: Velocity, gamma: Scalar) -> Self {
        Self { label, ct, x, s_origin: -v.get() * ct, tick_spacing: 1.0 / gamma }
    }

    /// Distance in S′ between the event and the S origin.
    #[inline]
    pub fn separation(&self) -> Scalar {
        (self.x - self.s_origin).abs()
    }

    /// S′ position of the S tick labelled `n`.
    #[inline]
    pub fn tick(&self, n: i32) -> Scalar {
        self.s_origin + n as Scalar * self.tick_spacing
    }
}
