#![deny(unsafe_code)]
//! Core types for the warpfield animation system.
//!
//! Provides the `Sampler` trait, the `Grid`/`ScalarGrid`/`VectorGrid` data
//! model, radial projection, the `Timeline` frame clock, `Xorshift64` PRNG,
//! `Scene`, and parameter helpers.

pub mod error;
pub mod grid;
pub mod params;
pub mod prng;
pub mod quiver;
pub mod sampler;
pub mod scalar;
pub mod scene;
pub mod timeline;

pub use error::FieldError;
pub use grid::Grid;
pub use prng::Xorshift64;
pub use quiver::{radial_projection, VectorGrid};
pub use sampler::{FieldSample, Sampler};
pub use scalar::ScalarGrid;
pub use scene::Scene;
pub use timeline::Timeline;
