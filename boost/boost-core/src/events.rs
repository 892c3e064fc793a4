//! The fixed event registry.
//!
//! Three events are defined once in the unprimed frame S and never change:
//! the origin O, event A separated from O purely in space, and event B
//! separated from O purely in time.

use serde::{Deserialize, Serialize};

use crate::Scalar;

/// Registry key of a canonical event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    O,
    A,
    B,
}

impl Label {
    /// Registry order.
    pub const ALL: [Label; 3] = [Label::O, Label::A, Label::B];

    pub fn name(self) -> &'static str {
        match self {
            Label::O => "O",
            Label::A => "A",
            Label::B => "B",
        }
    }
}

/// Display color tagged onto each event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

/// A spacetime event `(x, ct)` in S.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Event {
    pub label: Label,
    pub x: Scalar,
    pub ct: Scalar,
    pub color: Color,
}

impl Event {
    #[inline]
    pub fn coords(&self) -> (Scalar, Scalar) {
        (self.x, self.ct)
    }
}

/// O, A, B in registry order; indexable by `Label as usize`.
pub static EVENTS: [Event; 3] = [
    Event { label: Label::O, x: 0.0, ct: 0.0, color: Color::Black },
    Event { label: Label::A, x: 1.0, ct: 0.0, color: Color::Red },
    Event { label: Label::B, x: 0.0, ct: 1.0, color: Color::Green },
];

/// Lookup by label.
#[inline]
pub fn event(label: Label) -> &'static Event {
    &EVENTS[label as usize]
}

/// The three unordered pairs of registry events.
pub fn pairs() -> [(Label, Label); 3] {
    [(Label::O, Label::A), (Label::O, Label::B), (Label::A, Label::B)]
}
