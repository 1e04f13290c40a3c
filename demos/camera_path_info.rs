//! Inspect a camera path document
//!
//! Prints frame count and bounds, then previews which frames a replay at the
//! given speed would select.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use wavebox_animation::CameraReplay;
use wavebox_io::{frame_index, CameraPath};

#[derive(Parser, Debug)]
#[command(name = "camera_path_info")]
#[command(about = "Summarize a camera path and preview its replay", long_about = None)]
struct Args {
    /// Camera path JSON
    path: PathBuf,

    /// Path frames advanced per tick
    #[arg(long, default_value = "1.5")]
    speed: f64,

    /// Number of ticks to preview
    #[arg(long, default_value = "10")]
    ticks: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let path = CameraPath::from_path(&args.path)?;

    println!("Camera path: {}", args.path.display());
    println!("- {} frames", path.len());

    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    let mut radius = (f64::INFINITY, f64::NEG_INFINITY);
    for frame in path.frames() {
        let loc = frame.camera_location;
        let distance = loc.distance_from_origin();
        radius = (radius.0.min(distance), radius.1.max(distance));
        for (i, v) in [loc.x, loc.y, loc.z].into_iter().enumerate() {
            min[i] = min[i].min(v);
            max[i] = max[i].max(v);
        }
    }
    println!("- x: {:.3}..{:.3}", min[0], max[0]);
    println!("- y: {:.3}..{:.3}", min[1], max[1]);
    println!("- z: {:.3}..{:.3}", min[2], max[2]);
    println!("- distance from origin: {:.3}..{:.3}", radius.0, radius.1);

    println!("\nReplay preview (speed {}):", args.speed);
    let len = path.len();
    let mut replay = CameraReplay::with_speed(path, args.speed);
    for tick in 0..args.ticks {
        let counter = replay.counter();
        let index = frame_index(counter, len).unwrap_or(0);
        if let Some(loc) = replay.advance(true) {
            println!(
                "  tick {:>3}: counter {:>7.2} -> frame {:>4} ({:.3}, {:.3}, {:.3})",
                tick, counter, index, loc.x, loc.y, loc.z
            );
        }
    }

    Ok(())
}
