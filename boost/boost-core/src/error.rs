//! Crate-level error types for boost-core.

use thiserror::Error;

use crate::Scalar;

/// The boost velocity lies outside the open interval (-c, c).
///
/// γ is undefined there, so every checked entry point rejects the velocity
/// before any arithmetic runs.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("boost velocity v = {v} is not below light speed (need |v| < c = 1)")]
    NotSubluminal { v: Scalar },

    #[error("boost velocity v = {v} is not a finite number")]
    NotFinite { v: Scalar },
}
