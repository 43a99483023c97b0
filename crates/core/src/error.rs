//! Error types for the warpfield core.

use thiserror::Error;

/// Errors produced by grid, sampler, and pipeline operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero when creating a grid or scalar field.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two grids or fields had incompatible shapes for an operation.
    #[error("shape mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    ShapeMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A scene's domain half-width was non-positive or non-finite.
    #[error("invalid domain: half_width must be positive and finite")]
    InvalidDomain,

    /// A timeline was requested with zero frames.
    #[error("invalid timeline: frame count must be non-zero and t_end finite")]
    InvalidTimeline,

    /// A sampler name was not recognized by the registry.
    #[error("unknown sampler: {0}")]
    UnknownSampler(String),

    /// A colormap name was not recognized.
    #[error("unknown colormap: {0}")]
    UnknownColormap(String),

    /// A colormap was requested with zero bands.
    #[error("invalid colormap: {0}")]
    InvalidColormap(String),

    /// An I/O failure while writing frames.
    #[error("io error: {0}")]
    Io(String),
}
