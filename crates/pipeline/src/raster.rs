//! CPU rasterization: filled-contour layers and quiver arrow overlays.
//!
//! One pixel per grid cell. A [`ContourLayer`] is the rendered form of a
//! scalar field: every cell colored by its quantized band, with a uniform
//! alpha so overlapping layers (contraction over expansion) blend the way
//! the original translucent contour plots did. The quiver overlay draws an
//! arrow segment at a configurable cell stride, oriented and scaled by the
//! U, V components.

use crate::colormap::{Colormap, Rgb};
use warpfield_core::error::FieldError;
use warpfield_core::quiver::VectorGrid;
use warpfield_core::scalar::ScalarGrid;

/// A rendered scalar-field layer: RGBA bytes, one pixel per grid cell.
#[derive(Debug, Clone)]
pub struct ContourLayer {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl ContourLayer {
    /// Layer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Layer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA bytes, row-major, `width * height * 4` long.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// Rasterizes a scalar field into a filled-contour layer.
///
/// Values are normalized over `range` (or the field's own min/max when
/// `None`, matching the default contour behavior), quantized into `levels`
/// bands, and colored through `map`. `alpha` in [0, 1] is applied uniformly.
pub fn render_contours(
    field: &ScalarGrid,
    map: &Colormap,
    levels: usize,
    alpha: f64,
    range: Option<(f64, f64)>,
) -> Result<ContourLayer, FieldError> {
    let (vmin, vmax) = range.unwrap_or_else(|| field.min_max());
    let span = vmax - vmin;
    let alpha_byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;

    let mut rgba = Vec::with_capacity(field.data().len() * 4);
    for &v in field.data() {
        let t = if span > 0.0 { (v - vmin) / span } else { 0.0 };
        let [r, g, b] = map.sample_banded(t, levels)?.to_bytes();
        rgba.extend_from_slice(&[r, g, b, alpha_byte]);
    }
    Ok(ContourLayer {
        width: field.width(),
        height: field.height(),
        rgba,
    })
}

/// Quiver overlay styling.
#[derive(Debug, Clone, Copy)]
pub struct QuiverStyle {
    /// Draw an arrow every `stride` cells on both axes.
    pub stride: usize,
    /// Pixels of arrow length per unit of field magnitude.
    pub scale: f64,
    /// Arrow color.
    pub color: Rgb,
}

impl Default for QuiverStyle {
    fn default() -> Self {
        Self {
            stride: 8,
            scale: 6.0,
            color: Rgb { r: 0.0, g: 0.0, b: 0.0 },
        }
    }
}

/// An opaque RGBA canvas that layers are composited onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Canvas {
    /// Creates an opaque white canvas.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            rgba: vec![255; len],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consumes the canvas, returning its pixel buffer.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Alpha-blends a layer over the canvas (source-over).
    ///
    /// Returns `FieldError::ShapeMismatch` if the layer size differs.
    pub fn blend(&mut self, layer: &ContourLayer) -> Result<(), FieldError> {
        if layer.width != self.width || layer.height != self.height {
            return Err(FieldError::ShapeMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: layer.width,
                rhs_h: layer.height,
            });
        }
        for (dst, src) in self.rgba.chunks_exact_mut(4).zip(layer.rgba.chunks_exact(4)) {
            let a = src[3] as f64 / 255.0;
            for c in 0..3 {
                let blended = src[c] as f64 * a + dst[c] as f64 * (1.0 - a);
                dst[c] = blended.round() as u8;
            }
        }
        Ok(())
    }

    /// Draws the quiver overlay: one arrow per `stride`-th cell, from the
    /// cell toward `(u, v) * scale` pixels.
    ///
    /// Arrows extending past the canvas are clipped pixel by pixel.
    pub fn draw_quiver(&mut self, vectors: &VectorGrid, style: &QuiverStyle) -> Result<(), FieldError> {
        let u = vectors.u();
        let v = vectors.v();
        if u.width() != self.width || u.height() != self.height {
            return Err(FieldError::ShapeMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: u.width(),
                rhs_h: u.height(),
            });
        }
        let stride = style.stride.max(1);
        let color = style.color.to_bytes();
        for row in (0..self.height).step_by(stride) {
            for col in (0..self.width).step_by(stride) {
                let i = row * self.width + col;
                let x1 = col as f64 + u.get(i) * style.scale;
                // Screen y grows downward; field y grows upward.
                let y1 = row as f64 - v.get(i) * style.scale;
                self.draw_line(col as i64, row as i64, x1.round() as i64, y1.round() as i64, color);
            }
        }
        Ok(())
    }

    /// Writes one opaque pixel, ignoring out-of-bounds coordinates.
    fn put_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        self.rgba[i] = color[0];
        self.rgba[i + 1] = color[1];
        self.rgba[i + 2] = color[2];
        self.rgba[i + 3] = 255;
    }

    /// Bresenham line from (x0, y0) to (x1, y1).
    fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: [u8; 3]) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.put_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
