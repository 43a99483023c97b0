#![deny(unsafe_code)]
//! CLI binary for the warpfield animation pipeline.
//!
//! Subcommands:
//! - `animate <sampler>` — run the full timeline, write a PNG frame sequence
//! - `render <sampler>` — compose a single frame at a given time, write PNG
//! - `list` — print available samplers and colormaps

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use warpfield_core::Scene;
use warpfield_pipeline::animate::{AnimationDriver, FrameStyle};
use warpfield_pipeline::colormap::Colormap;
use warpfield_pipeline::raster::QuiverStyle;
use warpfield_pipeline::{snapshot, SamplerKind};

#[derive(Parser)]
#[command(name = "warpfield", about = "Animated field sampling pipeline CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by `animate` and `render` that define the scene.
#[derive(Args)]
struct SceneArgs {
    /// Sampler name (e.g. "warp-realistic").
    sampler: String,

    /// Grid columns.
    #[arg(short = 'W', long, default_value_t = 100)]
    width: usize,

    /// Grid rows.
    #[arg(short = 'H', long, default_value_t = 100)]
    height: usize,

    /// Domain half-width L; coordinates span [-L, L] on both axes.
    #[arg(long, default_value_t = 5.0)]
    half_width: f64,

    /// PRNG seed for the noisy variants.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Sampler parameter overrides as a JSON string.
    #[arg(long, default_value = "{}")]
    params: String,
}

impl SceneArgs {
    fn to_scene(&self) -> Result<Scene, CliError> {
        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut scene = Scene::new(&self.sampler, self.width, self.height, self.seed);
        scene.half_width = self.half_width;
        scene.params = params;
        Ok(scene)
    }
}

/// Rendering style flags shared by `animate` and `render`.
#[derive(Args)]
struct StyleArgs {
    /// Contour band count per layer.
    #[arg(long, default_value_t = 50)]
    levels: usize,

    /// Layer alpha in [0, 1].
    #[arg(long, default_value_t = 0.7)]
    alpha: f64,

    /// Skip the quiver arrow overlay.
    #[arg(long)]
    no_quiver: bool,
}

impl StyleArgs {
    fn to_style(&self) -> FrameStyle {
        FrameStyle {
            levels: self.levels,
            alpha: self.alpha,
            quiver: if self.no_quiver {
                None
            } else {
                Some(QuiverStyle::default())
            },
            ..FrameStyle::default()
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run a sampler over the whole timeline and write a PNG frame sequence.
    Animate {
        #[command(flatten)]
        scene: SceneArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Frame count over [0, t_end].
        #[arg(short, long, default_value_t = 100)]
        frames: usize,

        /// Final time value.
        #[arg(long, default_value_t = 1.0)]
        t_end: f64,

        /// Frame interval in milliseconds, recorded in the scene file.
        #[arg(long, default_value_t = 50)]
        interval: u64,

        /// Output directory for the frame sequence.
        #[arg(short, long, default_value = "frames")]
        outdir: PathBuf,

        /// Also write the resolved scene as JSON to this path.
        #[arg(long)]
        scene_out: Option<PathBuf>,
    },
    /// Compose a single frame at a given time and write a PNG.
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Time value to sample at.
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available samplers and colormaps.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let samplers = SamplerKind::list_samplers();
            let colormaps = Colormap::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "samplers": samplers,
                    "colormaps": colormaps,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Samplers:");
                for name in samplers {
                    println!("  {name}");
                }
                println!("Colormaps:");
                println!("  {}", colormaps.join(", "));
            }
        }
        Command::Animate {
            scene,
            style,
            frames,
            t_end,
            interval,
            outdir,
            scene_out,
        } => {
            let mut scene = scene.to_scene()?;
            scene.frames = frames;
            scene.t_end = t_end;
            scene.interval_ms = interval;

            let mut driver = AnimationDriver::from_scene(&scene, style.to_style())?;
            std::fs::create_dir_all(&outdir).map_err(|e| CliError::Io(e.to_string()))?;
            let written = snapshot::write_frame_sequence(&mut driver, &outdir)?;

            if let Some(path) = &scene_out {
                let json = serde_json::to_string_pretty(&scene)?;
                std::fs::write(path, json).map_err(|e| CliError::Io(e.to_string()))?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "sampler": scene.sampler,
                    "width": scene.width,
                    "height": scene.height,
                    "frames": written,
                    "t_end": scene.t_end,
                    "interval_ms": scene.interval_ms,
                    "seed": scene.seed,
                    "outdir": outdir.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "animated {} ({}x{}, {written} frames, seed {}) -> {}",
                    scene.sampler,
                    scene.width,
                    scene.height,
                    scene.seed,
                    outdir.display()
                );
            }
        }
        Command::Render {
            scene,
            style,
            time,
            output,
        } => {
            let scene = scene.to_scene()?;
            let mut driver = AnimationDriver::from_scene(&scene, style.to_style())?;
            let canvas = driver.render_at(time)?;
            snapshot::write_png(&canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "sampler": scene.sampler,
                    "width": scene.width,
                    "height": scene.height,
                    "time": time,
                    "seed": scene.seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, t = {time}, seed {}) -> {}",
                    scene.sampler,
                    scene.width,
                    scene.height,
                    scene.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
