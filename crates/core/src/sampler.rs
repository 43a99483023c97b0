//! The core `Sampler` trait that every field variant implements.
//!
//! A sampler evaluates a closed-form expression pointwise over a coordinate
//! grid at a given time and returns one or two scalar fields. The trait is
//! object-safe so samplers can be used as `dyn Sampler` for runtime
//! switching between variants.

use crate::error::FieldError;
use crate::grid::Grid;
use crate::scalar::ScalarGrid;
use serde_json::Value;

/// One frame's worth of sampled field data.
///
/// Either a single scalar field or a contraction/expansion pair. Arrays
/// always match the shape of the grid they were sampled over.
#[derive(Debug, Clone)]
pub enum FieldSample {
    /// A single scalar field.
    Scalar(ScalarGrid),
    /// Two independent scalar fields, named after the warp-field zones.
    Pair {
        contraction: ScalarGrid,
        expansion: ScalarGrid,
    },
}

impl FieldSample {
    /// The field driving the U (horizontal) component of the quiver.
    ///
    /// For a pair this is the contraction zone, matching the original
    /// projection `U = contraction * x / r`.
    pub fn u_source(&self) -> &ScalarGrid {
        match self {
            FieldSample::Scalar(f) => f,
            FieldSample::Pair { contraction, .. } => contraction,
        }
    }

    /// The field driving the V (vertical) component of the quiver.
    pub fn v_source(&self) -> &ScalarGrid {
        match self {
            FieldSample::Scalar(f) => f,
            FieldSample::Pair { expansion, .. } => expansion,
        }
    }

    /// Verifies every field matches the given grid shape.
    pub fn check_shape(&self, grid: &Grid) -> Result<(), FieldError> {
        let check = |f: &ScalarGrid| {
            if f.width() != grid.width() || f.height() != grid.height() {
                Err(FieldError::ShapeMismatch {
                    lhs_w: f.width(),
                    lhs_h: f.height(),
                    rhs_w: grid.width(),
                    rhs_h: grid.height(),
                })
            } else {
                Ok(())
            }
        };
        match self {
            FieldSample::Scalar(f) => check(f),
            FieldSample::Pair {
                contraction,
                expansion,
            } => {
                check(contraction)?;
                check(expansion)
            }
        }
    }
}

/// Core trait for field samplers.
///
/// Each sampler is a pure function of `(x, y, t)` per cell, except that the
/// noisy variant draws fresh per-cell Gaussian noise from an RNG injected at
/// construction. That RNG advance is why `sample` takes `&mut self`; the
/// deterministic variants never touch internal state.
///
/// This trait is **object-safe**: you can use `Box<dyn Sampler>` or
/// `&mut dyn Sampler` for runtime polymorphism.
pub trait Sampler {
    /// Evaluates the field over the whole grid at time `t`.
    ///
    /// The returned arrays always match the grid shape exactly.
    fn sample(&mut self, grid: &Grid, t: f64) -> Result<FieldSample, FieldError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
