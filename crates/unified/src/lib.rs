#![deny(unsafe_code)]
//! Unified-field sampler.
//!
//! One scalar field: a Gaussian envelope `exp(-r²)` modulated by the sum of
//! four sinusoids standing in for the four fundamental forces. Gravity and
//! electromagnetism oscillate at the low frequency, the strong and weak
//! terms at the high frequency:
//!
//! ```text
//! field(x, y, t) = exp(-r²) · (sin(2π·f_lo·t) + cos(2π·f_lo·t)
//!                            + sin(2π·f_hi·t) + cos(2π·f_hi·t))
//! ```
//!
//! At `t = 0` the sum collapses to `2·exp(-r²)`, so the origin cell reads
//! exactly 2.0. The sampler is pure: same grid and time always produce the
//! same field.

use serde_json::{json, Value};
use std::f64::consts::PI;
use warpfield_core::error::FieldError;
use warpfield_core::grid::Grid;
use warpfield_core::params::param_f64;
use warpfield_core::sampler::{FieldSample, Sampler};
use warpfield_core::scalar::ScalarGrid;

/// Default low frequency in cycles per unit time (gravity, electromagnetism).
const DEFAULT_LOW_FREQ: f64 = 1.0;
/// Default high frequency in cycles per unit time (strong, weak).
const DEFAULT_HIGH_FREQ: f64 = 2.0;

/// Parameters for the unified-field sampler.
///
/// The defaults reproduce the original `sin/cos(2πt)` and `sin/cos(4πt)`
/// terms: 1 and 2 cycles per unit of `t`.
#[derive(Debug, Clone, Copy)]
pub struct UnifiedParams {
    /// Frequency of the gravity/electromagnetism terms, cycles per unit t.
    pub low_freq: f64,
    /// Frequency of the strong/weak terms, cycles per unit t.
    pub high_freq: f64,
}

impl Default for UnifiedParams {
    fn default() -> Self {
        Self {
            low_freq: DEFAULT_LOW_FREQ,
            high_freq: DEFAULT_HIGH_FREQ,
        }
    }
}

impl UnifiedParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            low_freq: param_f64(params, "low_freq", DEFAULT_LOW_FREQ),
            high_freq: param_f64(params, "high_freq", DEFAULT_HIGH_FREQ),
        }
    }
}

/// Unified-field sampler: Gaussian envelope times four force terms.
#[derive(Debug, Clone)]
pub struct UnifiedField {
    params: UnifiedParams,
}

impl UnifiedField {
    /// Creates a sampler with the given parameters.
    pub fn new(params: UnifiedParams) -> Self {
        Self { params }
    }

    /// Creates a sampler from a JSON params object.
    pub fn from_json(json_params: &Value) -> Self {
        Self::new(UnifiedParams::from_json(json_params))
    }

    /// The time-dependent factor shared by every cell: the sum of the four
    /// sinusoids at the current time.
    fn oscillation(&self, t: f64) -> f64 {
        let lo = 2.0 * PI * self.params.low_freq * t;
        let hi = 2.0 * PI * self.params.high_freq * t;
        lo.sin() + lo.cos() + hi.sin() + hi.cos()
    }
}

impl Default for UnifiedField {
    fn default() -> Self {
        Self::new(UnifiedParams::default())
    }
}

impl Sampler for UnifiedField {
    fn sample(&mut self, grid: &Grid, t: f64) -> Result<FieldSample, FieldError> {
        let osc = self.oscillation(t);
        let data = grid
            .iter()
            .map(|(x, y)| (-(x * x + y * y)).exp() * osc)
            .collect();
        Ok(FieldSample::Scalar(ScalarGrid::from_data(
            grid.width(),
            grid.height(),
            data,
        )?))
    }

    fn params(&self) -> Value {
        json!({
            "low_freq": self.params.low_freq,
            "high_freq": self.params.high_freq,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "low_freq": {
                "type": "number",
                "default": DEFAULT_LOW_FREQ,
                "min": 0.0,
                "max": 10.0,
                "description": "Frequency of the gravity/electromagnetism terms, cycles per unit t"
            },
            "high_freq": {
                "type": "number",
                "default": DEFAULT_HIGH_FREQ,
                "min": 0.0,
                "max": 10.0,
                "description": "Frequency of the strong/weak terms, cycles per unit t"
            }
        })
    }
}
