//! Scene configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wavebox_algorithms::{CompositorConfig, WaterDropParams};
use wavebox_core::{BoxSeriesStyle, Error, Result};

use crate::clock::AnimationClock;
use crate::replay::CameraReplay;

/// Everything needed to build an [`AnimationSession`](crate::AnimationSession)
///
/// Every field has a default, so a JSON config only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Static water-drop field
    pub generator: WaterDropParams,
    /// Boxes per side
    pub resolution: usize,
    /// Clock increment per frame
    pub time_step: f64,
    /// Travelling-wave perturbation
    pub compositor: CompositorConfig,
    /// Camera path frames advanced per tick
    pub camera_speed: f64,
    /// Optional camera path document
    pub camera_path: Option<PathBuf>,
    /// Initial state of the camera animation toggle
    pub camera_animation_enabled: bool,
    /// Series styling handed to the surface
    pub style: BoxSeriesStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            generator: WaterDropParams::default(),
            resolution: 10,
            time_step: AnimationClock::DEFAULT_STEP,
            compositor: CompositorConfig::default(),
            camera_speed: CameraReplay::DEFAULT_SPEED,
            camera_path: None,
            camera_animation_enabled: true,
            style: BoxSeriesStyle::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("invalid scene config: {}", e)))
    }

    /// Read a configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Use a square field of `resolution × resolution` nodes
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self.generator = self.generator.with_resolution(resolution);
        self
    }

    /// Check cross-field constraints before building a session
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(Error::InvalidArgument("resolution must be positive".to_string()));
        }
        if self.generator.size_x < self.resolution || self.generator.size_z < self.resolution {
            return Err(Error::InvalidArgument(format!(
                "generator grid {}x{} is smaller than resolution {}",
                self.generator.size_x, self.generator.size_z, self.resolution
            )));
        }
        if !self.time_step.is_finite() {
            return Err(Error::InvalidArgument("time_step must be finite".to_string()));
        }
        if !self.camera_speed.is_finite() {
            return Err(Error::InvalidArgument("camera_speed must be finite".to_string()));
        }
        if !self.compositor.footprint.is_finite() || self.compositor.footprint < 0.0 {
            return Err(Error::InvalidArgument("box footprint must be a non-negative number".to_string()));
        }
        Ok(())
    }
}
