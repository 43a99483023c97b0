//! PNG output for composed frames.
//!
//! Feature-gated behind `png` (default on) so the rendering pipeline can be
//! used without pulling in the `image` crate.

use std::path::Path;

use warpfield_core::error::FieldError;

use crate::animate::AnimationDriver;
use crate::raster::Canvas;

/// Writes a composed canvas as a PNG image.
///
/// Returns `FieldError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), FieldError> {
    let w = u32::try_from(canvas.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, canvas.rgba().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

/// Runs a driver's whole timeline, writing each frame to `dir` as
/// `frame_0000.png`, `frame_0001.png`, ... Returns the frame count.
pub fn write_frame_sequence(
    driver: &mut AnimationDriver,
    dir: &Path,
) -> Result<usize, FieldError> {
    driver.run(|i, canvas| write_png(canvas, &dir.join(format!("frame_{i:04}.png"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate::FrameStyle;
    use warpfield_core::scene::Scene;

    #[test]
    fn write_png_round_trip() {
        let canvas = Canvas::new(16, 16).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
    }

    #[test]
    fn frame_sequence_writes_numbered_files() {
        let mut scene = Scene::new("warp", 8, 8, 42);
        scene.frames = 3;
        let mut driver = AnimationDriver::from_scene(&scene, FrameStyle::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = write_frame_sequence(&mut driver, dir.path()).unwrap();

        assert_eq!(written, 3);
        for i in 0..3 {
            assert!(dir.path().join(format!("frame_{i:04}.png")).exists());
        }
        assert!(!dir.path().join("frame_0003.png").exists());
    }
}
