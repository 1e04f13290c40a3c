//! Water-drop height-field generation

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wavebox_core::{Error, HeightGrid, Oscillator, Result};

/// Parameters of a water-drop height field
///
/// Oscillator positions are normalized to the unit square; amplitudes are in
/// output height units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterDropParams {
    /// Number of grid nodes along X
    pub size_x: usize,
    /// Number of grid nodes along Z
    pub size_z: usize,
    /// Drop X positions in `[0, 1]`
    pub x_positions: Vec<f64>,
    /// Drop Z positions in `[0, 1]`
    pub z_positions: Vec<f64>,
    /// Drop amplitudes
    pub amplitudes: Vec<f64>,
    /// Level added to every node
    pub offset: f64,
    /// Wave density
    pub volatility: f64,
}

impl Default for WaterDropParams {
    fn default() -> Self {
        Self {
            size_x: 10,
            size_z: 10,
            x_positions: vec![0.2, 0.5, 0.7],
            z_positions: vec![0.6, 0.5, 0.3],
            amplitudes: vec![15.0, 50.0, 3.0],
            offset: 47.0,
            volatility: 25.0,
        }
    }
}

impl WaterDropParams {
    /// Same parameters with a square `resolution × resolution` grid
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.size_x = resolution;
        self.size_z = resolution;
        self
    }

    /// Validate and build the generator for these parameters
    pub fn generator(&self) -> Result<WaterDropGenerator> {
        WaterDropGenerator::new(
            &self.x_positions,
            &self.z_positions,
            &self.amplitudes,
            self.offset,
            self.volatility,
        )
    }

    /// Generate the height grid described by these parameters
    pub fn generate(&self) -> Result<HeightGrid> {
        self.generator()?.generate(self.size_x, self.size_z)
    }
}

/// A set of oscillators sampled over the unit square
#[derive(Debug, Clone, PartialEq)]
pub struct WaterDropGenerator {
    oscillators: Vec<Oscillator>,
    offset: f64,
    volatility: f64,
}

impl WaterDropGenerator {
    /// Create a generator from parallel parameter arrays
    ///
    /// # Arguments
    /// * `x_positions` - Oscillator centres along X, normalized to `[0, 1]`
    /// * `z_positions` - Oscillator centres along Z, normalized to `[0, 1]`
    /// * `amplitudes` - Oscillator amplitudes
    /// * `offset` - Level added to every sample
    /// * `volatility` - Spatial frequency of the radial cosine
    ///
    /// # Returns
    /// * `Result<WaterDropGenerator>` - Error if the arrays differ in length
    pub fn new(
        x_positions: &[f64],
        z_positions: &[f64],
        amplitudes: &[f64],
        offset: f64,
        volatility: f64,
    ) -> Result<Self> {
        if x_positions.len() != amplitudes.len() || z_positions.len() != amplitudes.len() {
            return Err(Error::InvalidArgument(format!(
                "oscillator arrays differ in length: {} x positions, {} z positions, {} amplitudes",
                x_positions.len(),
                z_positions.len(),
                amplitudes.len()
            )));
        }

        let oscillators = amplitudes
            .iter()
            .zip(x_positions.iter().zip(z_positions.iter()))
            .map(|(&amplitude, (&x, &z))| Oscillator::new(amplitude, x, z))
            .collect();

        Ok(Self::from_oscillators(oscillators, offset, volatility))
    }

    /// Create a generator from prebuilt oscillators
    pub fn from_oscillators(oscillators: Vec<Oscillator>, offset: f64, volatility: f64) -> Self {
        Self {
            oscillators,
            offset,
            volatility,
        }
    }

    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Height at a normalized point `(x, z)` of the unit square
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let waves = self
            .oscillators
            .iter()
            .fold(0.0, |acc, osc| acc + osc.contribution(x, z, self.volatility));
        waves + self.offset
    }

    /// Sample a `size_z × size_x` grid over `[0, 1) × [0, 1)`
    ///
    /// Node `(row, col)` sits at `x = col / size_x`, `z = row / size_z`.
    /// Rows are evaluated in parallel; each node's sum is computed in the
    /// same order as [`sample`](Self::sample), so output is bit-identical
    /// across runs.
    pub fn generate(&self, size_x: usize, size_z: usize) -> Result<HeightGrid> {
        if size_x == 0 || size_z == 0 {
            return Err(Error::InvalidArgument(format!(
                "height grid size must be positive, got {}x{}",
                size_x, size_z
            )));
        }

        let step_x = 1.0 / size_x as f64;
        let step_z = 1.0 / size_z as f64;
        log::debug!(
            "Generating {}x{} water drop field from {} oscillators (step {:.4} x {:.4})",
            size_x,
            size_z,
            self.oscillators.len(),
            step_x,
            step_z
        );

        let values: Vec<f64> = (0..size_z)
            .into_par_iter()
            .flat_map_iter(|row| {
                let z = row as f64 / size_z as f64;
                (0..size_x).map(move |col| self.sample(col as f64 / size_x as f64, z))
            })
            .collect();

        HeightGrid::from_row_major(size_z, size_x, values)
    }
}

/// Generate a water-drop height grid
///
/// Each node sums `gain * amplitude * cos(d * volatility) * exp(-3 d)` over all
/// oscillators, where `d` is the distance from the node to the oscillator
/// centre, then adds `offset`. The output range is not normalized.
///
/// # Arguments
/// * `size_x` - Number of columns
/// * `size_z` - Number of rows
/// * `x_positions` - Oscillator centres along X
/// * `z_positions` - Oscillator centres along Z
/// * `amplitudes` - Oscillator amplitudes
/// * `offset` - Level added to every node
/// * `volatility` - Wave density
///
/// # Example
/// ```rust
/// use wavebox_algorithms::generate;
///
/// fn main() -> wavebox_core::Result<()> {
///     let grid = generate(10, 10, &[0.2, 0.5, 0.7], &[0.6, 0.5, 0.3], &[15.0, 50.0, 3.0], 47.0, 25.0)?;
///     assert_eq!(grid.size_x(), 10);
///     Ok(())
/// }
/// ```
pub fn generate(
    size_x: usize,
    size_z: usize,
    x_positions: &[f64],
    z_positions: &[f64],
    amplitudes: &[f64],
    offset: f64,
    volatility: f64,
) -> Result<HeightGrid> {
    WaterDropGenerator::new(x_positions, z_positions, amplitudes, offset, volatility)?
        .generate(size_x, size_z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_is_deterministic() {
        let params = WaterDropParams::default();
        let first = params.generate().unwrap();
        let second = params.generate().unwrap();

        for (a, b) in first.as_array().iter().zip(second.as_array().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_single_oscillator_at_center() {
        let amplitude = 12.0;
        let offset = 3.5;
        let generator = WaterDropGenerator::new(&[0.5], &[0.5], &[amplitude], offset, 25.0).unwrap();

        assert_eq!(generator.sample(0.5, 0.5), amplitude + offset);

        // Node (5, 5) of a 10x10 grid sits exactly on the centre
        let grid = generator.generate(10, 10).unwrap();
        assert_eq!(grid[(5, 5)], amplitude + offset);
    }

    #[test]
    fn test_grid_matches_sample() {
        let generator = WaterDropParams::default().generator().unwrap();
        let grid = generator.generate(8, 4).unwrap();

        assert_eq!(grid.size_x(), 8);
        assert_eq!(grid.size_z(), 4);
        for row in 0..4 {
            for col in 0..8 {
                let expected = generator.sample(col as f64 / 8.0, row as f64 / 4.0);
                assert_eq!(grid[(row, col)], expected);
            }
        }
    }

    #[test]
    fn test_no_oscillators_is_flat() {
        let grid = generate(3, 3, &[], &[], &[], 47.0, 25.0).unwrap();
        assert!(grid.as_array().iter().all(|&h| h == 47.0));
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = generate(10, 10, &[0.2, 0.5], &[0.6, 0.5, 0.3], &[15.0, 50.0, 3.0], 47.0, 25.0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = generate(10, 10, &[0.2, 0.5, 0.7], &[0.6, 0.5, 0.3], &[15.0], 47.0, 25.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_size_rejected() {
        let params = WaterDropParams::default().with_resolution(0);
        assert!(matches!(params.generate(), Err(Error::InvalidArgument(_))));

        let result = generate(4, 0, &[0.5], &[0.5], &[1.0], 0.0, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_field_range() {
        let grid = WaterDropParams::default().generate().unwrap();
        let (min, max) = grid.range().unwrap();

        assert!(min > 0.0, "min height {} should stay above ground", min);
        assert!(max < 110.0, "max height {} out of expected range", max);
    }

    #[test]
    fn test_default_field_orientation() {
        // Rows run along Z: the amplitude-15 drop at (x 0.2, z 0.6) lands on row 6, column 2
        let grid = WaterDropParams::default().generate().unwrap();

        assert_relative_eq!(grid[(6, 2)], 60.77685043289168, epsilon = 1e-9);
        assert_relative_eq!(grid[(2, 6)], 44.17309240840207, epsilon = 1e-9);
    }

    #[test]
    fn test_oscillator_gain_scales_contribution() {
        let mut loud = Oscillator::new(10.0, 0.5, 0.5);
        loud.gain = 2.0;
        let generator = WaterDropGenerator::from_oscillators(vec![loud], 1.0, 25.0);

        assert_eq!(generator.oscillators().len(), 1);
        assert_eq!(generator.sample(0.5, 0.5), 21.0);

        let plain = WaterDropGenerator::new(&[0.5], &[0.5], &[10.0], 1.0, 25.0).unwrap();
        assert_relative_eq!(
            generator.sample(0.1, 0.8) - 1.0,
            2.0 * (plain.sample(0.1, 0.8) - 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_volatility_zero_is_pure_decay() {
        let generator = WaterDropGenerator::new(&[0.0], &[0.0], &[10.0], 0.0, 0.0).unwrap();
        assert_relative_eq!(generator.sample(0.3, 0.4), 10.0 * (-1.5_f64).exp(), epsilon = 1e-12);
    }
}
