//! Line geometry in the (x, ct) plane: simultaneity lines and the S grid.

use boost_core::{Model, Scalar, Velocity};
use serde::Serialize;

use crate::samples::Extent;

pub type Point = (Scalar, Scalar);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// A line of constant time, `ct = slope·x + intercept`, with its endpoints at
/// the extent boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SimultaneityLine {
    pub slope: Scalar,
    pub intercept: Scalar,
    pub from: Point,
    pub to: Point,
}

impl SimultaneityLine {
    /// Line through `point` with `slope`.
    pub fn through(point: Point, slope: Scalar, extent: Extent) -> Self {
        let intercept = point.1 - slope * point.0;
        let at = |x: Scalar| slope * x + intercept;
        Self {
            slope,
            intercept,
            from: (extent.x_min(), at(extent.x_min())),
            to: (extent.x_max(), at(extent.x_max())),
        }
    }

    #[inline]
    pub fn ct_at(&self, x: Scalar) -> Scalar {
        self.slope * x + self.intercept
    }

    #[inline]
    pub fn contains(&self, p: Point, tol: Scalar) -> bool {
        (self.ct_at(p.0) - p.1).abs() <= tol
    }

    pub fn segment(&self) -> Segment {
        Segment { from: self.from, to: self.to }
    }
}

/// One S coordinate line (`ct = value` or `x = value`) drawn in S′.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub value: Scalar,
    pub segment: Segment,
}

/// The S coordinate grid as seen from S′.
///
/// Each S line is mapped by transforming its two endpoints; both models are
/// linear so the image of the segment is exact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoordinateGrid {
    /// Images of `ct = value`.
    pub time_lines: Vec<GridLine>,
    /// Images of `x = value`.
    pub space_lines: Vec<GridLine>,
    /// Image of the S x axis (`ct = 0`).
    pub x_axis: Segment,
    /// Image of the S ct axis (`x = 0`).
    pub ct_axis: Segment,
}

impl CoordinateGrid {
    pub fn build(model: Model, v: Velocity, values: &[Scalar], extent: Extent) -> Self {
        let (lo, hi) = (extent.x_min(), extent.x_max());
        let map = |p: Point| model.apply(v, p.0, p.1);
        let time_line = |value: Scalar| Segment { from: map((lo, value)), to: map((hi, value)) };
        let space_line = |value: Scalar| Segment { from: map((value, lo)), to: map((value, hi)) };

        Self {
            time_lines: values.iter().map(|&value| GridLine { value, segment: time_line(value) }).collect(),
            space_lines: values.iter().map(|&value| GridLine { value, segment: space_line(value) }).collect(),
            x_axis: time_line(0.0),
            ct_axis: space_line(0.0),
        }
    }
}

/// Original grid spacing: -8, -6, …, 8.
pub fn default_grid_values() -> Vec<Scalar> {
    (-4..=4).map(|k| 2.0 * k as Scalar).collect()
}
