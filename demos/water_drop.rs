//! Headless water-drop box series animation
//!
//! This demo runs the full scene without a renderer:
//! - Generates the water-drop height field
//! - Animates it frame by frame through an in-memory surface
//! - Replays a recorded camera path
//! - Optionally dumps the final frame as JSON

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use wavebox_animation::{
    AnimationSession, CancellationToken, FixedRateFrames, FrameBudget, FrameScheduler, MemorySurface,
    SceneConfig,
};
use wavebox_core::{BoxDescriptor, BoxSeriesStyle, CameraController, CameraLocation, RenderSurface};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "water_drop")]
#[command(about = "Animated water-drop box series (headless)", long_about = None)]
struct Args {
    /// Scene configuration JSON
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Camera path JSON (overrides the config; defaults to the bundled orbit)
    #[arg(long, value_name = "FILE")]
    camera_path: Option<PathBuf>,

    /// Boxes per side (overrides the config)
    #[arg(long)]
    resolution: Option<usize>,

    /// Number of frames to render
    #[arg(long, default_value = "120")]
    frames: u64,

    /// Target frame rate; 0 renders as fast as possible
    #[arg(long, default_value = "60")]
    fps: f64,

    /// Stop after this many seconds even if frames remain
    #[arg(long, value_name = "SECONDS")]
    seconds: Option<f64>,

    /// Start with camera animation disabled
    #[arg(long)]
    no_camera: bool,

    /// Write the last frame's boxes to this file
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,

    /// Log a frame summary every N frames
    #[arg(long, default_value = "30")]
    report_every: u64,
}

/// Camera path shipped with the demos
const BUNDLED_CAMERA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/water_drop_camera.json");

/// Surface that keeps boxes in memory and logs colored frame summaries
struct LoggingSurface {
    inner: MemorySurface,
    report_every: u64,
    style: BoxSeriesStyle,
}

impl RenderSurface for LoggingSurface {
    fn configure(&mut self, style: &BoxSeriesStyle) -> wavebox_core::Result<()> {
        log::info!(
            "Box series style: {} palette steps (interpolate: {}), rounded edges {:?}",
            style.palette.steps().len(),
            style.palette.interpolate(),
            style.rounded_edges
        );
        self.style = style.clone();
        self.inner.configure(style)
    }

    fn invalidate_data(&mut self, boxes: &[BoxDescriptor]) -> wavebox_core::Result<()> {
        self.inner.invalidate_data(boxes)?;

        let frame = self.inner.frames();
        if self.report_every > 0 && frame % self.report_every == 0 {
            let tallest = boxes
                .iter()
                .max_by(|a, b| a.height().total_cmp(&b.height()));
            if let Some(tallest) = tallest {
                let color = self.style.palette.color_at(tallest.value.unwrap_or(0.0));
                log::info!(
                    "frame {}: {} boxes ({} new, {} updated), tallest #{} at {:.1} rgb({}, {}, {})",
                    frame,
                    boxes.len(),
                    self.inner.created(),
                    self.inner.updated(),
                    tallest.id,
                    tallest.height(),
                    color.r(),
                    color.g(),
                    color.b()
                );
            }
        }
        Ok(())
    }
}

/// Camera that logs where it was moved
#[derive(Default)]
struct LoggingCamera {
    moves: u64,
    last: Option<CameraLocation>,
}

impl CameraController for LoggingCamera {
    fn set_camera_location(&mut self, location: &CameraLocation) {
        log::debug!("camera -> ({:.3}, {:.3}, {:.3})", location.x, location.y, location.z);
        self.moves += 1;
        self.last = Some(*location);
    }
}

fn load_config(args: &Args) -> Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => SceneConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SceneConfig {
            camera_path: Some(PathBuf::from(BUNDLED_CAMERA_PATH)),
            ..SceneConfig::default()
        },
    };

    if let Some(resolution) = args.resolution {
        config = config.with_resolution(resolution);
    }
    if let Some(path) = &args.camera_path {
        config.camera_path = Some(path.clone());
    }
    if args.no_camera {
        config.camera_animation_enabled = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut session = AnimationSession::new(&config).context("failed to create animation session")?;
    let grid_range = session.grid().range();
    if let Some((min, max)) = grid_range {
        log::info!("Water drop field range: {:.2}..{:.2}", min, max);
    }

    let mut surface = LoggingSurface {
        inner: MemorySurface::new(),
        report_every: args.report_every,
        style: config.style.clone(),
    };
    let mut camera = LoggingCamera::default();

    let token = CancellationToken::new();
    if let Some(seconds) = args.seconds {
        let timer_token = token.clone();
        let timeout = Duration::try_from_secs_f64(seconds).context("invalid --seconds value")?;
        thread::spawn(move || {
            thread::sleep(timeout);
            timer_token.cancel();
        });
    }

    let report = if args.fps > 0.0 {
        let source = FixedRateFrames::new(args.fps)?.with_limit(args.frames);
        FrameScheduler::new(source).run(&mut session, &mut surface, &mut camera, &token)?
    } else {
        FrameScheduler::new(FrameBudget::new(args.frames)).run(&mut session, &mut surface, &mut camera, &token)?
    };

    println!(
        "Rendered {} frames ({:?}), t = {:.2}, camera moved {} times",
        report.frames,
        report.reason,
        session.clock().t(),
        camera.moves
    );
    if let Some(last) = camera.last {
        println!("Final camera location: ({:.3}, {:.3}, {:.3})", last.x, last.y, last.z);
    }

    if let Some(path) = &args.dump {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &surface.inner.snapshot())?;
        println!("Wrote {} boxes to {}", surface.inner.len(), path.display());
    }

    Ok(())
}
