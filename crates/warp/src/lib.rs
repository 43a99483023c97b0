#![deny(unsafe_code)]
//! Warp-field sampler family.
//!
//! Produces two scalar fields per frame, a contracting and an expanding
//! spacetime zone, each a Gaussian bubble modulated in time:
//!
//! ```text
//! contraction = sign · E(t) · exp(-r²) · (cos(2πt) + w(t) + n)
//! expansion   =        E(t) · exp(-r²) · (sin(2πt) + w(t) + n)
//! ```
//!
//! where `E(t) = exp(-decay_rate·t)` is an energy-dissipation envelope,
//! `w(t) = wave_amp·sin(4πt)` is a low-amplitude gravitational-wave
//! perturbation, and `n` is fresh per-cell Gaussian noise drawn from an
//! injected PRNG. One noise deviate is drawn per cell per frame and shared
//! by both zones, matching the single noise array of the original model.
//!
//! All refinements default to off; the presets mirror the handful of
//! near-identical script variants this family replaces.

use serde_json::{json, Value};
use std::f64::consts::PI;
use warpfield_core::error::FieldError;
use warpfield_core::grid::Grid;
use warpfield_core::params::{param_bool, param_f64};
use warpfield_core::prng::Xorshift64;
use warpfield_core::sampler::{FieldSample, Sampler};
use warpfield_core::scalar::ScalarGrid;

/// Energy-dissipation rate used by the decaying presets.
const REALISTIC_DECAY_RATE: f64 = 0.1;
/// Gravitational-wave amplitude used by the realistic presets.
const REALISTIC_WAVE_AMP: f64 = 0.1;
/// Noise standard deviation used by the realistic presets.
const REALISTIC_NOISE_SIGMA: f64 = 0.1;

/// Parameters for the warp-field sampler.
///
/// [`Default`] is the classic variant: no inversion, no decay, no wave,
/// no noise.
#[derive(Debug, Clone, Copy)]
pub struct WarpParams {
    /// Negate the contraction zone (the inverted variant).
    pub invert_contraction: bool,
    /// Energy-dissipation rate; 0 disables the envelope.
    pub decay_rate: f64,
    /// Gravitational-wave perturbation amplitude; 0 disables it.
    pub wave_amp: f64,
    /// Per-cell Gaussian noise standard deviation; 0 disables noise.
    pub noise_sigma: f64,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self {
            invert_contraction: false,
            decay_rate: 0.0,
            wave_amp: 0.0,
            noise_sigma: 0.0,
        }
    }
}

impl WarpParams {
    /// Classic variant: pure cos/sin bubbles.
    pub fn classic() -> Self {
        Self::default()
    }

    /// Inverted variant: contraction negated.
    pub fn inverted() -> Self {
        Self {
            invert_contraction: true,
            ..Self::default()
        }
    }

    /// Decaying variant: dissipation envelope only.
    pub fn decaying() -> Self {
        Self {
            decay_rate: REALISTIC_DECAY_RATE,
            ..Self::default()
        }
    }

    /// Realistic variant: dissipation, gravitational wave, and noise.
    pub fn realistic() -> Self {
        Self {
            invert_contraction: false,
            decay_rate: REALISTIC_DECAY_RATE,
            wave_amp: REALISTIC_WAVE_AMP,
            noise_sigma: REALISTIC_NOISE_SIGMA,
        }
    }

    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::default().merge_json(params)
    }

    /// Overrides fields from a JSON object, keeping `self` as the fallback.
    ///
    /// Lets the registry apply user overrides on top of a named preset.
    pub fn merge_json(self, params: &Value) -> Self {
        Self {
            invert_contraction: param_bool(params, "invert_contraction", self.invert_contraction),
            decay_rate: param_f64(params, "decay_rate", self.decay_rate),
            wave_amp: param_f64(params, "wave_amp", self.wave_amp),
            noise_sigma: param_f64(params, "noise_sigma", self.noise_sigma),
        }
    }
}

/// Warp-field sampler: contraction and expansion zones.
///
/// Holds the injected PRNG for the noise term; deterministic per seed.
#[derive(Debug, Clone)]
pub struct WarpField {
    params: WarpParams,
    rng: Xorshift64,
}

impl WarpField {
    /// Creates a sampler with the given parameters and noise seed.
    ///
    /// The seed only matters when `noise_sigma > 0`; noiseless variants
    /// never advance the RNG.
    pub fn new(params: WarpParams, seed: u64) -> Self {
        Self {
            params,
            rng: Xorshift64::new(seed),
        }
    }

    /// Creates a sampler from a JSON params object.
    pub fn from_json(json_params: &Value, seed: u64) -> Self {
        Self::new(WarpParams::from_json(json_params), seed)
    }

    /// Dissipation envelope at time `t`.
    fn envelope(&self, t: f64) -> f64 {
        (-self.params.decay_rate * t).exp()
    }

    /// Gravitational-wave perturbation at time `t`.
    fn wave(&self, t: f64) -> f64 {
        self.params.wave_amp * (4.0 * PI * t).sin()
    }
}

impl Sampler for WarpField {
    fn sample(&mut self, grid: &Grid, t: f64) -> Result<FieldSample, FieldError> {
        let envelope = self.envelope(t);
        let wave = self.wave(t);
        let cos_t = (2.0 * PI * t).cos();
        let sin_t = (2.0 * PI * t).sin();
        let sign = if self.params.invert_contraction {
            -1.0
        } else {
            1.0
        };
        let sigma = self.params.noise_sigma;

        let len = grid.len();
        let mut contraction = Vec::with_capacity(len);
        let mut expansion = Vec::with_capacity(len);
        for (x, y) in grid.iter() {
            let bubble = envelope * (-(x * x + y * y)).exp();
            // One deviate per cell, shared by both zones.
            let noise = self.rng.next_gaussian(sigma);
            contraction.push(sign * bubble * (cos_t + wave + noise));
            expansion.push(bubble * (sin_t + wave + noise));
        }

        Ok(FieldSample::Pair {
            contraction: ScalarGrid::from_data(grid.width(), grid.height(), contraction)?,
            expansion: ScalarGrid::from_data(grid.width(), grid.height(), expansion)?,
        })
    }

    fn params(&self) -> Value {
        json!({
            "invert_contraction": self.params.invert_contraction,
            "decay_rate": self.params.decay_rate,
            "wave_amp": self.params.wave_amp,
            "noise_sigma": self.params.noise_sigma,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "invert_contraction": {
                "type": "boolean",
                "default": false,
                "description": "Negate the contraction zone"
            },
            "decay_rate": {
                "type": "number",
                "default": 0.0,
                "min": 0.0,
                "max": 1.0,
                "description": "Energy-dissipation rate; 0 disables the envelope"
            },
            "wave_amp": {
                "type": "number",
                "default": 0.0,
                "min": 0.0,
                "max": 1.0,
                "description": "Gravitational-wave perturbation amplitude; 0 disables it"
            },
            "noise_sigma": {
                "type": "number",
                "default": 0.0,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-cell Gaussian noise standard deviation; 0 disables noise"
            }
        })
    }
}
