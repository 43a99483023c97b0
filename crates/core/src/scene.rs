//! Reproducible specification for an animation run.
//!
//! A [`Scene`] captures everything needed to recreate a run: sampler name,
//! grid resolution and domain, timeline, frame interval, parameters, and
//! PRNG seed. Two identical `Scene` values fed to the same binary produce
//! bit-identical frames.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for an animation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    /// Sampler name as registered in the pipeline (e.g. "warp-realistic").
    pub sampler: String,
    /// Grid columns.
    pub width: usize,
    /// Grid rows.
    pub height: usize,
    /// Domain half-width L: coordinates span [-L, L] on both axes.
    pub half_width: f64,
    /// Frame count.
    pub frames: usize,
    /// Final time value; frames are spaced linearly over [0, t_end].
    pub t_end: f64,
    /// Frame interval in milliseconds. Cosmetic pacing hint for a display
    /// collaborator; the pipeline records it but never sleeps.
    pub interval_ms: u64,
    /// PRNG seed for the noisy variants.
    pub seed: u64,
    /// Sampler parameter overrides.
    pub params: serde_json::Value,
}

impl Scene {
    /// Creates a scene with the defaults shared by the original scripts:
    /// domain `[-5, 5]²`, 100 frames over `[0, 1]`, 50 ms interval,
    /// empty params.
    pub fn new(sampler: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            sampler: sampler.to_string(),
            width,
            height,
            half_width: 5.0,
            frames: 100,
            t_end: 1.0,
            interval_ms: 50,
            seed,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates dimensions, domain, and timeline bounds.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(FieldError::InvalidDimensions)?;
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(FieldError::InvalidDomain);
        }
        if self.frames == 0 || !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(FieldError::InvalidTimeline);
        }
        Ok(())
    }
}
