//! Per-frame box composition from a static height grid

use std::f64::consts::PI;

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use wavebox_core::{BoxDescriptor, Error, HeightGrid, Result};

/// Travelling-wave perturbation applied on top of the static grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Amplitude of the wave travelling along X
    pub x_wave_amplitude: f64,
    /// Amplitude of the wave travelling along Z
    pub z_wave_amplitude: f64,
    /// Phase advance per column
    pub x_phase_step: f64,
    /// Phase advance per row
    pub z_phase_step: f64,
    /// Width and depth of every box
    pub footprint: f64,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            x_wave_amplitude: 50.0,
            z_wave_amplitude: 20.0,
            x_phase_step: 0.5,
            z_phase_step: 1.0,
            footprint: 1.0,
        }
    }
}

impl CompositorConfig {
    /// Height of the box at column `x`, row `y` for clock value `t`
    ///
    /// The result is clamped to zero so boxes flatten but never invert below
    /// the ground plane.
    pub fn box_height(&self, base: f64, t: f64, x: usize, y: usize, resolution: usize) -> f64 {
        let res = resolution as f64;
        let x_wave = self.x_wave_amplitude * ((t + x as f64 * self.x_phase_step) * PI / res).sin();
        let z_wave = self.z_wave_amplitude * ((t + y as f64 * self.z_phase_step) * PI / res).sin();
        (base + x_wave + z_wave).max(0.0)
    }
}

fn check_dimensions(grid: &HeightGrid, resolution: usize) -> Result<()> {
    if resolution == 0 {
        return Err(Error::InvalidArgument(
            "frame resolution must be positive".to_string(),
        ));
    }
    if grid.size_x() < resolution || grid.size_z() < resolution {
        return Err(Error::InvalidArgument(format!(
            "{}x{} height grid is smaller than frame resolution {}",
            grid.size_x(),
            grid.size_z(),
            resolution
        )));
    }
    Ok(())
}

/// Compose one animation frame with the default wave configuration
///
/// See [`compose_frame_with`].
pub fn compose_frame(grid: &HeightGrid, t: f64, resolution: usize) -> Result<Vec<BoxDescriptor>> {
    compose_frame_with(grid, t, resolution, &CompositorConfig::default())
}

/// Compose one animation frame
///
/// Visits columns `x` (outer) and rows `y` (inner) of a
/// `resolution × resolution` window of the grid. Each cell becomes a box at
/// `(x, height / 2, y)` sized `(footprint, height, footprint)`; its id is the
/// visiting index `x * resolution + y`.
///
/// # Arguments
/// * `grid` - Static height field, at least `resolution` in both dimensions
/// * `t` - Animation clock value
/// * `resolution` - Boxes per side
/// * `config` - Wave perturbation parameters
///
/// # Returns
/// * `Result<Vec<BoxDescriptor>>` - Exactly `resolution²` boxes
pub fn compose_frame_with(
    grid: &HeightGrid,
    t: f64,
    resolution: usize,
    config: &CompositorConfig,
) -> Result<Vec<BoxDescriptor>> {
    check_dimensions(grid, resolution)?;

    let boxes = iproduct!(0..resolution, 0..resolution)
        .enumerate()
        .map(|(id, (x, y))| {
            let height = config.box_height(grid[(y, x)], t, x, y, resolution);
            BoxDescriptor::column(id.to_string(), x as f64, y as f64, config.footprint, height)
        })
        .collect();

    Ok(boxes)
}

/// Frame compositor that keeps its box buffer between frames
///
/// Ids are allocated once; later frames only rewrite geometry and values.
#[derive(Debug, Clone)]
pub struct FrameCompositor {
    resolution: usize,
    config: CompositorConfig,
    boxes: Vec<BoxDescriptor>,
}

impl FrameCompositor {
    pub fn new(resolution: usize, config: CompositorConfig) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::InvalidArgument(
                "frame resolution must be positive".to_string(),
            ));
        }
        Ok(Self {
            resolution,
            config,
            boxes: Vec::with_capacity(resolution * resolution),
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Boxes of the most recent frame
    pub fn boxes(&self) -> &[BoxDescriptor] {
        &self.boxes
    }

    /// Recompute all boxes for clock value `t`
    pub fn compose(&mut self, grid: &HeightGrid, t: f64) -> Result<&[BoxDescriptor]> {
        if self.boxes.is_empty() {
            self.boxes = compose_frame_with(grid, t, self.resolution, &self.config)?;
            return Ok(self.boxes.as_slice());
        }

        check_dimensions(grid, self.resolution)?;
        let resolution = self.resolution;
        for (desc, (x, y)) in self.boxes.iter_mut().zip(iproduct!(0..resolution, 0..resolution)) {
            let height = self.config.box_height(grid[(y, x)], t, x, y, resolution);
            desc.center.y = height / 2.0;
            desc.size.y = height;
            desc.value = Some(height);
        }
        Ok(self.boxes.as_slice())
    }
}

/// Aggregate statistics of one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub count: usize,
    pub min_height: f64,
    pub max_height: f64,
    pub mean_height: f64,
}

impl FrameSummary {
    /// Summarize box heights; all fields are zero for an empty frame
    pub fn from_boxes(boxes: &[BoxDescriptor]) -> Self {
        if boxes.is_empty() {
            return Self {
                count: 0,
                min_height: 0.0,
                max_height: 0.0,
                mean_height: 0.0,
            };
        }

        let (min, max, sum) = boxes.iter().map(BoxDescriptor::height).fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), h| (min.min(h), max.max(h), sum + h),
        );

        Self {
            count: boxes.len(),
            min_height: min,
            max_height: max,
            mean_height: sum / boxes.len() as f64,
        }
    }
}
