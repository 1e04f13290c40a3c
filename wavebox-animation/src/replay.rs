//! Cyclic camera path replay

use wavebox_core::CameraLocation;
use wavebox_io::CameraPath;

/// Replays a camera path at a fixed number of path frames per tick
///
/// Playback is not tied to wall-clock time: every enabled tick selects
/// `frames[floor(counter) % len]` and then advances the counter by `speed`.
#[derive(Debug, Clone)]
pub struct CameraReplay {
    path: CameraPath,
    counter: f64,
    speed: f64,
}

impl CameraReplay {
    /// Path frames advanced per tick by default
    pub const DEFAULT_SPEED: f64 = 1.5;

    pub fn new(path: CameraPath) -> Self {
        Self::with_speed(path, Self::DEFAULT_SPEED)
    }

    pub fn with_speed(path: CameraPath, speed: f64) -> Self {
        Self {
            path,
            counter: 0.0,
            speed,
        }
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    /// Fractional playback position
    pub fn counter(&self) -> f64 {
        self.counter
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Location for this tick, if playback is enabled
    ///
    /// While disabled the counter holds still so playback resumes where it
    /// paused.
    pub fn advance(&mut self, enabled: bool) -> Option<CameraLocation> {
        if !enabled {
            return None;
        }
        let location = self.path.frame_at(self.counter).map(|f| f.camera_location);
        self.counter += self.speed;
        location
    }
}
