//! Drawable-layer ownership across animation frames.
//!
//! The only state that survives a frame tick is the set of current contour
//! layers. The original scripts tracked these in a mutable dict and removed
//! stale collections by hand before redrawing; here the [`Stage`] owns the
//! layers exclusively and `replace_layer` drops the previous frame's layer
//! before installing its successor, so the live count can never grow past
//! one per field.

use crate::raster::{Canvas, ContourLayer};
use warpfield_core::error::FieldError;

/// Owns the current frame's drawable layers, keyed by field name.
///
/// Layers composite in first-insertion order, which stays stable across
/// replacements (contraction stays below expansion for the whole run).
#[derive(Debug, Default)]
pub struct Stage {
    layers: Vec<(String, ContourLayer)>,
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `layer` under `name`, dropping any previous layer with the
    /// same name first. The slot keeps its original compositing position.
    pub fn replace_layer(&mut self, name: &str, layer: ContourLayer) {
        match self.layers.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = layer,
            None => self.layers.push((name.to_string(), layer)),
        }
    }

    /// Number of live drawable layers.
    pub fn live_layers(&self) -> usize {
        self.layers.len()
    }

    /// The current layer under `name`, if any.
    pub fn layer(&self, name: &str) -> Option<&ContourLayer> {
        self.layers.iter().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    /// Drops every layer.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Composites all layers in insertion order over an opaque white canvas.
    ///
    /// Returns `FieldError::InvalidDimensions` if the stage is empty and
    /// `FieldError::ShapeMismatch` if layers disagree on size.
    pub fn compose(&self) -> Result<Canvas, FieldError> {
        let first = self
            .layers
            .first()
            .ok_or(FieldError::InvalidDimensions)?;
        let mut canvas = Canvas::new(first.1.width(), first.1.height())?;
        for (_, layer) in &self.layers {
            canvas.blend(layer)?;
        }
        Ok(canvas)
    }
}
