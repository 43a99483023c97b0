#![deny(unsafe_code)]
//! Sampler registry, rendering, and the animation driver.
//!
//! This crate sits between `warpfield-core` (which defines the `Sampler`
//! trait) and the individual sampler crates. The CLI depends on this crate
//! so name dispatch and frame rendering live in one place.

pub mod animate;
pub mod colormap;
pub mod raster;
pub mod stage;

#[cfg(feature = "png")]
pub mod snapshot;

use serde_json::Value;
use warpfield_core::error::FieldError;
use warpfield_core::grid::Grid;
use warpfield_core::sampler::{FieldSample, Sampler};
use warpfield_unified::UnifiedField;
use warpfield_warp::{WarpField, WarpParams};

/// All recognized sampler names.
const SAMPLER_NAMES: &[&str] = &["unified", "warp", "warp-inverted", "warp-decay", "warp-realistic"];

/// Enumeration of all available field samplers.
///
/// Wraps each sampler implementation and delegates `Sampler` trait methods.
/// Use [`SamplerKind::from_name`] for string-based construction (CLI).
pub enum SamplerKind {
    /// Unified field: one scalar, four force terms.
    Unified(UnifiedField),
    /// Warp field: contraction/expansion pair, any preset.
    Warp(WarpField),
}

impl SamplerKind {
    /// Constructs a sampler by name, applying JSON overrides on top of the
    /// named preset.
    ///
    /// Returns `FieldError::UnknownSampler` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value, seed: u64) -> Result<Self, FieldError> {
        let warp = |preset: WarpParams| {
            SamplerKind::Warp(WarpField::new(preset.merge_json(params), seed))
        };
        match name {
            "unified" => Ok(SamplerKind::Unified(UnifiedField::from_json(params))),
            "warp" => Ok(warp(WarpParams::classic())),
            "warp-inverted" => Ok(warp(WarpParams::inverted())),
            "warp-decay" => Ok(warp(WarpParams::decaying())),
            "warp-realistic" => Ok(warp(WarpParams::realistic())),
            _ => Err(FieldError::UnknownSampler(name.to_string())),
        }
    }

    /// Returns a slice of all recognized sampler names.
    pub fn list_samplers() -> &'static [&'static str] {
        SAMPLER_NAMES
    }
}

impl Sampler for SamplerKind {
    fn sample(&mut self, grid: &Grid, t: f64) -> Result<FieldSample, FieldError> {
        match self {
            SamplerKind::Unified(s) => s.sample(grid, t),
            SamplerKind::Warp(s) => s.sample(grid, t),
        }
    }

    fn params(&self) -> Value {
        match self {
            SamplerKind::Unified(s) => s.params(),
            SamplerKind::Warp(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SamplerKind::Unified(s) => s.param_schema(),
            SamplerKind::Warp(s) => s.param_schema(),
        }
    }
}
