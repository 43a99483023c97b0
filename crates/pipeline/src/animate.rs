//! The per-frame orchestration loop.
//!
//! An [`AnimationDriver`] owns a sampler, the grid, the timeline, and the
//! stage, and turns each time tick into a composed RGBA frame: sample the
//! field, replace the stage's contour layers, composite, then overlay the
//! quiver. Single-threaded and frame-synchronous; nothing but the stage
//! persists between ticks.

use crate::colormap::Colormap;
use crate::raster::{render_contours, Canvas, QuiverStyle};
use crate::stage::Stage;
use crate::SamplerKind;
use warpfield_core::error::FieldError;
use warpfield_core::grid::Grid;
use warpfield_core::quiver::radial_projection;
use warpfield_core::sampler::{FieldSample, Sampler};
use warpfield_core::scene::Scene;
use warpfield_core::timeline::Timeline;

/// Per-frame rendering style.
#[derive(Debug, Clone)]
pub struct FrameStyle {
    /// Contour band count per layer.
    pub levels: usize,
    /// Layer alpha in [0, 1].
    pub alpha: f64,
    /// Fixed normalization range; `None` uses each frame's own min/max.
    pub range: Option<(f64, f64)>,
    /// Quiver overlay; `None` disables arrows.
    pub quiver: Option<QuiverStyle>,
    /// Colormap for single-field samplers.
    pub scalar_map: Colormap,
    /// Colormap for the contraction zone of pair samplers.
    pub contraction_map: Colormap,
    /// Colormap for the expansion zone of pair samplers.
    pub expansion_map: Colormap,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            levels: 50,
            alpha: 0.7,
            range: None,
            quiver: Some(QuiverStyle::default()),
            scalar_map: Colormap::grays(),
            contraction_map: Colormap::blues(),
            expansion_map: Colormap::reds(),
        }
    }
}

/// Drives a sampler through a finite timeline, producing one composed
/// frame per tick.
pub struct AnimationDriver {
    sampler: Box<dyn Sampler>,
    grid: Grid,
    timeline: Timeline,
    stage: Stage,
    style: FrameStyle,
    interval_ms: u64,
    frame_index: usize,
}

impl AnimationDriver {
    /// Creates a driver from its parts.
    pub fn new(
        sampler: Box<dyn Sampler>,
        grid: Grid,
        timeline: Timeline,
        style: FrameStyle,
        interval_ms: u64,
    ) -> Self {
        Self {
            sampler,
            grid,
            timeline,
            stage: Stage::new(),
            style,
            interval_ms,
            frame_index: 0,
        }
    }

    /// Builds a driver from a validated [`Scene`], with the given style.
    pub fn from_scene(scene: &Scene, style: FrameStyle) -> Result<Self, FieldError> {
        scene.validate()?;
        let sampler = SamplerKind::from_name(&scene.sampler, &scene.params, scene.seed)?;
        let grid = Grid::centered(scene.width, scene.height, scene.half_width)?;
        let timeline = Timeline::new(scene.t_end, scene.frames)?;
        Ok(Self::new(
            Box::new(sampler),
            grid,
            timeline,
            style,
            scene.interval_ms,
        ))
    }

    /// The coordinate grid frames are sampled over.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The stage holding the current frame's layers.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Total frame count of the timeline.
    pub fn frames(&self) -> usize {
        self.timeline.frames()
    }

    /// Index of the next frame to produce.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Frame interval in milliseconds. Recorded pacing hint; the driver
    /// itself never sleeps.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Produces the next frame, or `None` once the timeline is exhausted.
    pub fn advance(&mut self) -> Result<Option<Canvas>, FieldError> {
        if self.frame_index >= self.timeline.frames() {
            return Ok(None);
        }
        let canvas = self.render_at(self.timeline.at(self.frame_index))?;
        self.frame_index += 1;
        Ok(Some(canvas))
    }

    /// Samples and composes a single frame at time `t`, replacing the
    /// stage's layers. Does not advance the timeline.
    pub fn render_at(&mut self, t: f64) -> Result<Canvas, FieldError> {
        let sample = self.sampler.sample(&self.grid, t)?;
        sample.check_shape(&self.grid)?;

        match &sample {
            FieldSample::Scalar(field) => {
                let layer = render_contours(
                    field,
                    &self.style.scalar_map,
                    self.style.levels,
                    self.style.alpha,
                    self.style.range,
                )?;
                self.stage.replace_layer("field", layer);
            }
            FieldSample::Pair {
                contraction,
                expansion,
            } => {
                let c = render_contours(
                    contraction,
                    &self.style.contraction_map,
                    self.style.levels,
                    self.style.alpha,
                    self.style.range,
                )?;
                let e = render_contours(
                    expansion,
                    &self.style.expansion_map,
                    self.style.levels,
                    self.style.alpha,
                    self.style.range,
                )?;
                self.stage.replace_layer("contraction", c);
                self.stage.replace_layer("expansion", e);
            }
        }

        let mut canvas = self.stage.compose()?;
        if let Some(quiver) = self.style.quiver {
            let vectors =
                radial_projection(&self.grid, sample.u_source(), sample.v_source())?;
            canvas.draw_quiver(&vectors, &quiver)?;
        }
        Ok(canvas)
    }

    /// Runs the whole timeline, invoking `on_frame` for every composed
    /// frame. Returns the number of frames produced.
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<usize, FieldError>
    where
        F: FnMut(usize, &Canvas) -> Result<(), FieldError>,
    {
        let mut produced = 0;
        while let Some(canvas) = self.advance()? {
            on_frame(self.frame_index - 1, &canvas)?;
            produced += 1;
        }
        Ok(produced)
    }
}
