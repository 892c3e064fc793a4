//! Validated generator inputs: the time-sample sequence and the spatial extent.

use boost_core::Scalar;
use serde::Serialize;

use crate::error::InputError;

/// Ordered, finite, strictly increasing time samples.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeSamples(Vec<Scalar>);

impl TimeSamples {
    pub fn new(ts: Vec<Scalar>) -> Result<Self, InputError> {
        if ts.is_empty() {
            return Err(InputError::Empty);
        }
        for (index, &value) in ts.iter().enumerate() {
            if !value.is_finite() {
                return Err(InputError::NotFinite { index, value });
            }
        }
        for (i, w) in ts.windows(2).enumerate() {
            if w[1] <= w[0] {
                return Err(InputError::NotIncreasing { index: i + 1, prev: w[0], next: w[1] });
            }
        }
        Ok(Self(ts))
    }

    /// `count` samples `start, start + step, …`.
    pub fn uniform(start: Scalar, step: Scalar, count: usize) -> Result<Self, InputError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(InputError::BadStep { step });
        }
        Self::new((0..count).map(|i| start + i as Scalar * step).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }
}

/// Closed spatial range `[x_min, x_max]` over which lines are sampled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Extent {
    x_min: Scalar,
    x_max: Scalar,
}

impl Extent {
    pub fn new(x_min: Scalar, x_max: Scalar) -> Result<Self, InputError> {
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return Err(InputError::BadExtent { x_min, x_max });
        }
        Ok(Self { x_min, x_max })
    }

    #[inline]
    pub fn x_min(&self) -> Scalar {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> Scalar {
        self.x_max
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self { x_min: -15.0, x_max: 15.0 }
    }
}
