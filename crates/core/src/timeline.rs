//! Finite monotonic frame clock.
//!
//! A `Timeline` is the pre-determined sequence of time values an animation
//! run steps through: `frames` values linearly spaced over `[0, t_end]`,
//! both endpoints included. There is no seeking and no back-pressure; the
//! driver consumes it front to back exactly once per run.

use crate::error::FieldError;

/// Linearly spaced time values over `[0, t_end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    t_end: f64,
    frames: usize,
}

impl Timeline {
    /// Creates a timeline of `frames` values spanning `[0, t_end]`.
    ///
    /// A single-frame timeline yields only `0.0`. Returns
    /// `FieldError::InvalidTimeline` if `frames` is zero, or `t_end` is
    /// negative or non-finite.
    pub fn new(t_end: f64, frames: usize) -> Result<Self, FieldError> {
        if frames == 0 || !t_end.is_finite() || t_end < 0.0 {
            return Err(FieldError::InvalidTimeline);
        }
        Ok(Self { t_end, frames })
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Final time value.
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Time value of frame `i` (0-based).
    pub fn at(&self, i: usize) -> f64 {
        if self.frames <= 1 {
            0.0
        } else {
            self.t_end * i as f64 / (self.frames - 1) as f64
        }
    }

    /// Iterates over all time values in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.frames).map(|i| self.at(i))
    }
}
