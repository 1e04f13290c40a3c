//! Animation sessions

use wavebox_algorithms::{CompositorConfig, FrameCompositor, FrameSummary};
use wavebox_core::{
    BoxDescriptor, BoxSeriesStyle, CameraController, Error, HeightGrid, RenderSurface, Result,
};
use wavebox_io::load_camera_path_or_skip;

use crate::clock::AnimationClock;
use crate::config::SceneConfig;
use crate::replay::CameraReplay;

fn ensure_fits(grid: &HeightGrid, resolution: usize) -> Result<()> {
    if grid.size_x() < resolution || grid.size_z() < resolution {
        return Err(Error::InvalidArgument(format!(
            "{}x{} height grid is smaller than resolution {}",
            grid.size_x(),
            grid.size_z(),
            resolution
        )));
    }
    Ok(())
}

/// State of one running box-series animation
///
/// The session owns everything a frame needs: the static height grid, the
/// clock, the camera animation toggle and the optional camera replay. Each
/// call to [`tick`](Self::tick) renders exactly one frame.
#[derive(Debug, Clone)]
pub struct AnimationSession {
    grid: HeightGrid,
    compositor: FrameCompositor,
    clock: AnimationClock,
    camera_animation_enabled: bool,
    replay: Option<CameraReplay>,
    style: BoxSeriesStyle,
    frames: u64,
}

impl AnimationSession {
    /// Build a session from a scene configuration
    ///
    /// Generates the height grid once. A configured camera path that cannot
    /// be loaded is logged and replay is left disabled.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let grid = config.generator.generate()?;
        let mut session = Self::from_grid(grid, config.resolution, config.compositor, config.time_step)?;
        session.camera_animation_enabled = config.camera_animation_enabled;
        session.style = config.style.clone();

        if let Some(path) = &config.camera_path {
            session.replay = load_camera_path_or_skip(path)
                .map(|camera_path| CameraReplay::with_speed(camera_path, config.camera_speed));
        }

        log::info!(
            "Animation session ready: {}x{} boxes, time step {}, camera replay {}",
            config.resolution,
            config.resolution,
            config.time_step,
            if session.replay.is_some() { "loaded" } else { "off" }
        );
        Ok(session)
    }

    /// Build a session around an existing height grid
    pub fn from_grid(
        grid: HeightGrid,
        resolution: usize,
        compositor: CompositorConfig,
        time_step: f64,
    ) -> Result<Self> {
        let compositor = FrameCompositor::new(resolution, compositor)?;
        ensure_fits(&grid, resolution)?;

        Ok(Self {
            grid,
            compositor,
            clock: AnimationClock::new(time_step),
            camera_animation_enabled: true,
            replay: None,
            style: BoxSeriesStyle::default(),
            frames: 0,
        })
    }

    /// Attach a camera replay, replacing any existing one
    pub fn with_camera_replay(mut self, replay: CameraReplay) -> Self {
        self.replay = Some(replay);
        self
    }

    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    /// Replace the static height grid
    pub fn set_grid(&mut self, grid: HeightGrid) -> Result<()> {
        ensure_fits(&grid, self.compositor.resolution())?;
        self.grid = grid;
        Ok(())
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn style(&self) -> &BoxSeriesStyle {
        &self.style
    }

    pub fn replay(&self) -> Option<&CameraReplay> {
        self.replay.as_ref()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Boxes of the most recent frame
    pub fn last_frame(&self) -> &[BoxDescriptor] {
        self.compositor.boxes()
    }

    pub fn camera_animation_enabled(&self) -> bool {
        self.camera_animation_enabled
    }

    /// Toggle camera path playback; the replay position is kept while off
    pub fn set_camera_animation_enabled(&mut self, enabled: bool) {
        if enabled != self.camera_animation_enabled {
            log::info!("Camera animation {}", if enabled { "enabled" } else { "disabled" });
        }
        self.camera_animation_enabled = enabled;
    }

    /// Render one frame
    ///
    /// Composes the boxes for the current clock value, upserts them into
    /// `surface`, applies the next camera location when replay is enabled,
    /// then advances the clock.
    pub fn tick<S, C>(&mut self, surface: &mut S, camera: &mut C) -> Result<FrameSummary>
    where
        S: RenderSurface + ?Sized,
        C: CameraController + ?Sized,
    {
        let t = self.clock.t();
        let boxes = self.compositor.compose(&self.grid, t)?;
        surface.invalidate_data(boxes)?;
        let summary = FrameSummary::from_boxes(boxes);

        if let Some(replay) = self.replay.as_mut() {
            if let Some(location) = replay.advance(self.camera_animation_enabled) {
                camera.set_camera_location(&location);
            }
        }

        self.clock.advance();
        self.frames += 1;
        log::trace!("frame {} at t = {:.3}", self.frames, t);
        log::debug!(
            "frame {}: {} boxes, height {:.2}..{:.2} (mean {:.2})",
            self.frames,
            summary.count,
            summary.min_height,
            summary.max_height,
            summary.mean_height
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CameraTrace, MemorySurface};
    use approx::assert_relative_eq;
    use wavebox_core::CameraLocation;
    use wavebox_io::{CameraFrame, CameraPath};

    fn two_frame_replay() -> CameraReplay {
        let frames = vec![
            CameraFrame { camera_location: CameraLocation::new(1.0, 0.0, 0.0) },
            CameraFrame { camera_location: CameraLocation::new(2.0, 0.0, 0.0) },
        ];
        CameraReplay::new(CameraPath::new(frames).unwrap())
    }

    #[test]
    fn test_session_from_default_config() {
        let session = AnimationSession::new(&SceneConfig::default()).unwrap();
        assert_eq!(session.grid().size_x(), 10);
        assert!(session.replay().is_none());
        assert_eq!(session.style().rounded_edges, Some(0.4));
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut session = AnimationSession::new(&SceneConfig::default()).unwrap();
        let mut surface = MemorySurface::new();
        let mut camera = CameraTrace::new();

        for _ in 0..3 {
            session.tick(&mut surface, &mut camera).unwrap();
        }

        assert_eq!(session.frames(), 3);
        assert_relative_eq!(session.clock().t(), 0.3, epsilon = 1e-12);
        assert_eq!(surface.frames(), 3);
        assert_eq!(session.last_frame().len(), 100);
    }

    #[test]
    fn test_ids_stable_across_ticks() {
        let mut session = AnimationSession::new(&SceneConfig::default()).unwrap();
        let mut surface = MemorySurface::new();
        let mut camera = CameraTrace::new();

        for _ in 0..5 {
            session.tick(&mut surface, &mut camera).unwrap();
        }

        assert_eq!(surface.len(), 100);
        assert_eq!(surface.created(), 100);
        assert_eq!(surface.updated(), 400);
    }

    #[test]
    fn test_camera_follows_toggle() {
        let grid = HeightGrid::zeros(2, 2);
        let mut session = AnimationSession::from_grid(grid, 2, CompositorConfig::default(), 0.1)
            .unwrap()
            .with_camera_replay(two_frame_replay());
        let mut surface = MemorySurface::new();
        let mut camera = CameraTrace::new();

        session.tick(&mut surface, &mut camera).unwrap();
        session.set_camera_animation_enabled(false);
        session.tick(&mut surface, &mut camera).unwrap();
        session.tick(&mut surface, &mut camera).unwrap();
        session.set_camera_animation_enabled(true);
        session.tick(&mut surface, &mut camera).unwrap();

        // Only the two enabled ticks moved the camera: counters 0 and 1.5
        let xs: Vec<f64> = camera.locations().iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
        assert_eq!(surface.frames(), 4);
    }

    #[test]
    fn test_missing_camera_path_is_not_fatal() {
        let config = SceneConfig {
            camera_path: Some("no/such/camera.json".into()),
            ..SceneConfig::default()
        };
        let session = AnimationSession::new(&config).unwrap();
        assert!(session.replay().is_none());
    }

    #[test]
    fn test_grid_smaller_than_resolution() {
        let grid = HeightGrid::zeros(3, 3);
        assert!(AnimationSession::from_grid(grid, 4, CompositorConfig::default(), 0.1).is_err());

        let mut session =
            AnimationSession::from_grid(HeightGrid::zeros(4, 4), 4, CompositorConfig::default(), 0.1).unwrap();
        assert!(session.set_grid(HeightGrid::zeros(2, 8)).is_err());
        assert!(session.set_grid(HeightGrid::zeros(5, 5)).is_ok());
    }
}
