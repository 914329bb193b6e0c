//! Construction-time failures. Per spec, the core never fails inside
//! `tick`: anomalies there are clamped or coerced silently. Everything
//! that can go wrong is caught once, at construction.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SirenError {
    #[error("envelope attack time must be >= 0, got {0}")]
    NegativeAttack(f32),
    #[error("envelope decay time must be >= 0, got {0}")]
    NegativeDecay(f32),
    #[error("envelope release time must be >= 0, got {0}")]
    NegativeRelease(f32),
    #[error("envelope sustain level must be in [0, 1], got {0}")]
    InvalidSustainLevel(f32),
    #[error("filter Q must be > 0, got {0}")]
    InvalidQ(f32),
}
