#![doc = r#"
boost-core: Galilean and Lorentz boost kernel

Natural units throughout: c = 1, velocities are fractions of c and the time
coordinate is carried as ct.

This crate provides:
- `Scalar`, the light speed `C` and the `Velocity` domain type
- `gamma`, `galilean_transform`, `lorentz_transform` (checked entry points)
- `Model`, the kinematic model selector with infallible `apply`/`invert`
- `transform_all`, the slice form of a transform
- `interval`: Δx² − Δ(ct)² between two (x, ct) pairs
- the fixed event registry (`EVENTS`, `event`, `Label`, `Color`)

```rust
use boost_core::{interval, lorentz_transform};

let (x, ct) = lorentz_transform(1.0, 0.0, 0.6).unwrap();
assert!((x - 1.25).abs() < 1e-12);
assert!((ct + 0.75).abs() < 1e-12);
assert!((interval((0.0, 0.0), (x, ct)) - 1.0).abs() < 1e-9);
```
"#]

pub mod error;
pub mod events;

pub use error::DomainError;
pub use events::{event, pairs, Color, Event, Label, EVENTS};

use serde::{Deserialize, Serialize};

pub type Scalar = f64;

/// Invariant speed in natural units.
pub const C: Scalar = 1.0;

/// Tolerance for interval invariance checks, relative to `max(1, |s²|)`.
pub const INTERVAL_TOLERANCE: Scalar = 1e-9;

/// A boost velocity known to satisfy `|v| < c`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "Scalar")]
pub struct Velocity(Scalar);

impl Velocity {
    pub const ZERO: Velocity = Velocity(0.0);

    pub fn new(v: Scalar) -> Result<Self, DomainError> {
        if !v.is_finite() {
            return Err(DomainError::NotFinite { v });
        }
        if v.abs() >= C {
            return Err(DomainError::NotSubluminal { v });
        }
        Ok(Self(v))
    }

    #[inline]
    pub fn get(self) -> Scalar {
        self.0
    }

    /// `self` scaled by `frac` clamped to [0, 1]; a NaN fraction yields zero.
    #[inline]
    pub fn scaled(self, frac: Scalar) -> Velocity {
        let f = if frac.is_nan() { 0.0 } else { frac.clamp(0.0, 1.0) };
        Velocity(self.0 * f)
    }

    /// Lorentz factor; finite for every constructible velocity.
    #[inline]
    pub fn gamma(self) -> Scalar {
        1.0 / (1.0 - (self.0 * self.0) / (C * C)).sqrt()
    }
}

impl TryFrom<Scalar> for Velocity {
    type Error = DomainError;

    fn try_from(v: Scalar) -> Result<Self, Self::Error> {
        Velocity::new(v)
    }
}

impl From<Velocity> for Scalar {
    fn from(v: Velocity) -> Scalar {
        v.0
    }
}

/// Lorentz factor γ(v) = 1/sqrt(1 − v²).
pub fn gamma(v: Scalar) -> Result<Scalar, DomainError> {
    Ok(Velocity::new(v)?.gamma())
}

/// Galilean boost: (x − v·ct, ct).
pub fn galilean_transform(x: Scalar, ct: Scalar, v: Scalar) -> Result<(Scalar, Scalar), DomainError> {
    Ok(Model::Galilean.apply(Velocity::new(v)?, x, ct))
}

/// Lorentz boost: (γ(x − v·ct), γ(ct − v·x)).
pub fn lorentz_transform(x: Scalar, ct: Scalar, v: Scalar) -> Result<(Scalar, Scalar), DomainError> {
    Ok(Model::Lorentz.apply(Velocity::new(v)?, x, ct))
}

/// Apply `model` to every pair. The velocity is checked once; each element
/// goes through the same scalar kernel as a single-pair call.
pub fn transform_all(
    model: Model,
    v: Scalar,
    pairs: &[(Scalar, Scalar)],
) -> Result<Vec<(Scalar, Scalar)>, DomainError> {
    let v = Velocity::new(v)?;
    Ok(pairs.iter().map(|&(x, ct)| model.apply(v, x, ct)).collect())
}

/// Spacetime interval s² = Δx² − Δ(ct)² between two (x, ct) pairs.
#[inline]
pub fn interval(e1: (Scalar, Scalar), e2: (Scalar, Scalar)) -> Scalar {
    let dx = e2.0 - e1.0;
    let dct = e2.1 - e1.1;
    dx * dx - dct * dct
}

/// |s²(S′) − s²(S)| for a pair of S events boosted under `model`.
#[inline]
pub fn interval_drift(model: Model, v: Velocity, e1: (Scalar, Scalar), e2: (Scalar, Scalar)) -> Scalar {
    let p1 = model.apply(v, e1.0, e1.1);
    let p2 = model.apply(v, e2.0, e2.1);
    (interval(p1, p2) - interval(e1, e2)).abs()
}

/// True when `after` matches `before` within `INTERVAL_TOLERANCE`.
#[inline]
pub fn interval_preserved(before: Scalar, after: Scalar) -> bool {
    (after - before).abs() <= INTERVAL_TOLERANCE * before.abs().max(1.0)
}

/// Kinematic model used to map S coordinates into S′.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Absolute time: only positions shift.
    Galilean,
    /// Relativistic: x and ct mix, simultaneity is frame dependent.
    Lorentz,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Galilean, Model::Lorentz];

    pub fn name(self) -> &'static str {
        match self {
            Model::Galilean => "galilean",
            Model::Lorentz => "lorentz",
        }
    }

    /// S → S′.
    #[inline]
    pub fn apply(self, v: Velocity, x: Scalar, ct: Scalar) -> (Scalar, Scalar) {
        let b = v.get() / C;
        match self {
            Model::Galilean => (x - b * ct, ct),
            Model::Lorentz => {
                let g = v.gamma();
                (g * (x - b * ct), g * (ct - b * x))
            }
        }
    }

    /// S′ → S.
    #[inline]
    pub fn invert(self, v: Velocity, xp: Scalar, ctp: Scalar) -> (Scalar, Scalar) {
        let b = v.get() / C;
        match self {
            Model::Galilean => (xp + b * ctp, ctp),
            Model::Lorentz => {
                let g = v.gamma();
                (g * (xp + b * ctp), g * (ctp + b * xp))
            }
        }
    }

    /// Dilation factor of the model: γ for Lorentz, 1 for Galilean.
    #[inline]
    pub fn gamma(self, v: Velocity) -> Scalar {
        match self {
            Model::Galilean => 1.0,
            Model::Lorentz => v.gamma(),
        }
    }

    /// Slope dct/dx of the S′ line of simultaneity drawn in S coordinates.
    #[inline]
    pub fn simultaneity_slope(self, v: Velocity) -> Scalar {
        match self {
            Model::Galilean => 0.0,
            Model::Lorentz => v.get() / C,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "galilean" => Ok(Model::Galilean),
            "lorentz" => Ok(Model::Lorentz),
            other => Err(format!("unknown model: {other}")),
        }
    }
}
