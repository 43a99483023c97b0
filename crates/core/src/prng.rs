//! Deterministic PRNG for per-cell noise sampling.
//!
//! Xorshift64 with a Box-Muller Gaussian on top. The noisy warp variant
//! draws one normal deviate per grid cell per frame; injecting this
//! generator at construction makes those runs reproducible per seed, unlike
//! the ambient global generator the original scripts leaned on.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 maps to a fixed fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a normally distributed f64 with mean 0 and the given
    /// standard deviation (Box-Muller transform).
    ///
    /// Consumes exactly two uniform draws per call. `sigma = 0` always
    /// returns 0 without touching the state, so disabling noise keeps the
    /// sequence unchanged.
    pub fn next_gaussian(&mut self, sigma: f64) -> f64 {
        if sigma == 0.0 {
            return 0.0;
        }
        // u1 in (0, 1] so the log stays finite.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        let mag = (-2.0 * u1.ln()).sqrt();
        sigma * mag * (2.0 * std::f64::consts::PI * u2).cos()
    }
}
