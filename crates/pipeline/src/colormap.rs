//! Colormaps: ordered color stops sampled continuously or in discrete bands.
//!
//! A filled-contour layer quantizes the scalar range into `levels` bands and
//! colors every cell by its band, which is what gives contour plots their
//! stepped look. The ramps here approximate the sequential maps the original
//! plots used (light-to-dark blues for contraction, reds for expansion).

use warpfield_core::error::FieldError;

/// An sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Quantizes to 8-bit channels.
    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Recognized colormap names.
const COLORMAP_NAMES: &[&str] = &["blues", "reds", "grays"];

/// A colormap: evenly spaced color stops interpolated in sRGB.
#[derive(Debug, Clone)]
pub struct Colormap {
    stops: Vec<Rgb>,
}

impl Colormap {
    /// Creates a colormap from ordered stops. Requires at least one stop.
    pub fn new(stops: Vec<Rgb>) -> Result<Self, FieldError> {
        if stops.is_empty() {
            return Err(FieldError::InvalidColormap(
                "colormap requires at least 1 stop".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// Sequential light-to-dark blue ramp.
    pub fn blues() -> Self {
        Self {
            stops: vec![
                Rgb { r: 0.97, g: 0.98, b: 1.00 },
                Rgb { r: 0.42, g: 0.68, b: 0.84 },
                Rgb { r: 0.03, g: 0.19, b: 0.42 },
            ],
        }
    }

    /// Sequential light-to-dark red ramp.
    pub fn reds() -> Self {
        Self {
            stops: vec![
                Rgb { r: 1.00, g: 0.96, b: 0.94 },
                Rgb { r: 0.98, g: 0.42, b: 0.29 },
                Rgb { r: 0.40, g: 0.00, b: 0.05 },
            ],
        }
    }

    /// Sequential light-to-dark gray ramp.
    pub fn grays() -> Self {
        Self {
            stops: vec![
                Rgb { r: 1.0, g: 1.0, b: 1.0 },
                Rgb { r: 0.0, g: 0.0, b: 0.0 },
            ],
        }
    }

    /// Looks up a colormap by name.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "blues" => Ok(Self::blues()),
            "reds" => Ok(Self::reds()),
            "grays" => Ok(Self::grays()),
            _ => Err(FieldError::UnknownColormap(name.to_string())),
        }
    }

    /// Returns all recognized colormap names.
    pub fn list_names() -> &'static [&'static str] {
        COLORMAP_NAMES
    }

    /// Samples the ramp continuously at `t` in [0, 1] (clamped; NaN maps
    /// to 0).
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;
        let c0 = self.stops[idx];
        let c1 = self.stops[idx + 1];
        Rgb {
            r: c0.r + frac * (c1.r - c0.r),
            g: c0.g + frac * (c1.g - c0.g),
            b: c0.b + frac * (c1.b - c0.b),
        }
    }

    /// Samples the ramp quantized into `levels` discrete bands.
    ///
    /// All `t` within one band map to the same color, taken at the band
    /// center. `levels` must be non-zero.
    pub fn sample_banded(&self, t: f64, levels: usize) -> Result<Rgb, FieldError> {
        if levels == 0 {
            return Err(FieldError::InvalidColormap(
                "band count must be non-zero".to_string(),
            ));
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let band = ((t * levels as f64) as usize).min(levels - 1);
        let center = (band as f64 + 0.5) / levels as f64;
        Ok(self.sample(center))
    }
}
