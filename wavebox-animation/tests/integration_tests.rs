//! Integration tests for wavebox-animation
//!
//! These tests run whole scenes: configuration, height-field generation,
//! camera path loading, scheduling and surface updates together.

use std::fs;

use approx::assert_relative_eq;
use wavebox_algorithms::{compose_frame, WaterDropParams};
use wavebox_animation::*;
use wavebox_core::{CameraLocation, RenderSurface};

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("wavebox_anim_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

fn orbit_path_json(frames: usize) -> String {
    let frames: Vec<String> = (0..frames)
        .map(|i| {
            let angle = i as f64 / frames as f64 * std::f64::consts::TAU;
            format!(
                r#"{{"cameraLocation":{{"x":{},"y":1.2,"z":{}}}}}"#,
                angle.cos(),
                angle.sin()
            )
        })
        .collect();
    format!(r#"{{"frames":[{}]}}"#, frames.join(","))
}

#[test]
fn test_scene_with_camera_path() {
    let camera_file = temp_file("orbit.json", &orbit_path_json(8));
    let config = SceneConfig {
        camera_path: Some(camera_file.clone()),
        ..SceneConfig::default()
    };

    let mut session = AnimationSession::new(&config).unwrap();
    assert!(session.replay().is_some());

    let mut surface = MemorySurface::new();
    let mut camera = CameraTrace::new();
    let token = CancellationToken::new();
    let report = FrameScheduler::new(FrameBudget::new(6))
        .run(&mut session, &mut surface, &mut camera, &token)
        .unwrap();

    assert_eq!(report.frames, 6);
    assert_eq!(camera.locations().len(), 6);
    // Counters 0, 1.5, 3, 4.5, 6, 7.5 select frames 0, 1, 3, 4, 6, 7
    let first = camera.locations()[0];
    assert_relative_eq!(first.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(first.z, 0.0, epsilon = 1e-12);
    let last = camera.last().unwrap();
    let angle = 7.0 / 8.0 * std::f64::consts::TAU;
    assert_relative_eq!(last.x, angle.cos(), epsilon = 1e-9);

    let _ = fs::remove_file(camera_file);
}

#[test]
fn test_surface_matches_direct_composition() {
    let mut session = AnimationSession::new(&SceneConfig::default()).unwrap();
    let grid = WaterDropParams::default().generate().unwrap();
    let mut surface = MemorySurface::new();
    let token = CancellationToken::new();

    FrameScheduler::new(FrameBudget::new(4))
        .run(&mut session, &mut surface, &mut CameraTrace::new(), &token)
        .unwrap();

    // The fourth frame was drawn at t = 0.1 * 3
    let t = 0.1 + 0.1 + 0.1;
    let expected = compose_frame(&grid, t, 10).unwrap();
    assert_eq!(surface.snapshot(), expected);
    assert!(expected.iter().all(|b| b.height() >= 0.0));
}

#[test]
fn test_config_file_drives_session() {
    let camera_file = temp_file("cfg_orbit.json", &orbit_path_json(3));
    let config_json = format!(
        r#"{{
            "resolution": 6,
            "generator": {{"size_x": 6, "size_z": 6, "offset": 10.0}},
            "time_step": 0.25,
            "camera_speed": 1.0,
            "camera_path": {:?},
            "camera_animation_enabled": false,
            "style": {{"rounded_edges": null}}
        }}"#,
        camera_file.display().to_string()
    );
    let config_file = temp_file("scene.json", &config_json);

    let config = SceneConfig::from_json_file(&config_file).unwrap();
    assert_eq!(config.style.rounded_edges, None);

    let mut session = AnimationSession::new(&config).unwrap();
    let mut surface = MemorySurface::new();
    let mut camera = CameraTrace::new();
    let token = CancellationToken::new();

    let mut scheduler = FrameScheduler::new(FrameBudget::new(2));
    scheduler.run(&mut session, &mut surface, &mut camera, &token).unwrap();
    assert!(camera.locations().is_empty());
    assert_eq!(surface.len(), 36);

    session.set_camera_animation_enabled(true);
    let mut scheduler = FrameScheduler::new(FrameBudget::new(4));
    scheduler.run(&mut session, &mut surface, &mut camera, &token).unwrap();
    let xs: Vec<f64> = camera.locations().iter().map(|l: &CameraLocation| l.x).collect();
    assert_eq!(xs.len(), 4);
    // Speed 1.0 over 3 frames wraps back to the first frame
    assert_relative_eq!(xs[0], xs[3], epsilon = 1e-12);
    assert_relative_eq!(session.clock().t(), 1.5, epsilon = 1e-12);

    let _ = fs::remove_file(camera_file);
    let _ = fs::remove_file(config_file);
}

#[test]
fn test_surface_style_is_configured_once() {
    struct CountingSurface {
        configured: usize,
        frames: usize,
    }

    impl RenderSurface for CountingSurface {
        fn configure(&mut self, _style: &wavebox_core::BoxSeriesStyle) -> wavebox_core::Result<()> {
            self.configured += 1;
            Ok(())
        }

        fn invalidate_data(&mut self, boxes: &[wavebox_core::BoxDescriptor]) -> wavebox_core::Result<()> {
            assert_eq!(boxes.len(), 100);
            self.frames += 1;
            Ok(())
        }
    }

    let mut session = AnimationSession::new(&SceneConfig::default()).unwrap();
    let mut surface = CountingSurface { configured: 0, frames: 0 };
    let token = CancellationToken::new();

    FrameScheduler::new(FrameBudget::new(5))
        .run(&mut session, &mut surface, &mut wavebox_core::NoCamera, &token)
        .unwrap();

    assert_eq!(surface.configured, 1);
    assert_eq!(surface.frames, 5);
}
