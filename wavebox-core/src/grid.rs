//! Oscillators and height grids

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{Error, Result};

/// A radial wave source contributing to a height field
///
/// The centre is expressed in normalized unit-square coordinates, so
/// `center_x` and `center_z` are expected to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    pub amplitude: f64,
    pub center_x: f64,
    pub center_z: f64,
    pub gain: f64,
}

impl Oscillator {
    /// Create an oscillator with unit gain
    pub fn new(amplitude: f64, center_x: f64, center_z: f64) -> Self {
        Self {
            amplitude,
            center_x,
            center_z,
            gain: 1.0,
        }
    }

    /// Euclidean distance from the oscillator centre to `(x, z)`
    pub fn distance_to(&self, x: f64, z: f64) -> f64 {
        let dist_x = x - self.center_x;
        let dist_z = z - self.center_z;
        (dist_x * dist_x + dist_z * dist_z).sqrt()
    }

    /// Damped cosine contribution of this oscillator at `(x, z)`
    pub fn contribution(&self, x: f64, z: f64, volatility: f64) -> f64 {
        let dist = self.distance_to(x, z);
        self.gain * self.amplitude * (dist * volatility).cos() * (-dist * 3.0).exp()
    }
}

/// A 2D grid of scalar heights indexed `[row][col]`
///
/// Rows run along the Z axis and columns along the X axis, so the grid has
/// `size_z` rows and `size_x` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    heights: Array2<f64>,
}

impl HeightGrid {
    /// Create a grid filled with zeros
    pub fn zeros(size_z: usize, size_x: usize) -> Self {
        Self {
            heights: Array2::zeros((size_z, size_x)),
        }
    }

    /// Wrap an existing `size_z × size_x` array
    pub fn from_array(heights: Array2<f64>) -> Self {
        Self { heights }
    }

    /// Build a grid from row-major values
    ///
    /// Fails with [`Error::InvalidArgument`] if `values.len() != size_z * size_x`.
    pub fn from_row_major(size_z: usize, size_x: usize, values: Vec<f64>) -> Result<Self> {
        let heights = Array2::from_shape_vec((size_z, size_x), values).map_err(|e| {
            Error::InvalidArgument(format!(
                "cannot shape {}x{} height grid: {}",
                size_z, size_x, e
            ))
        })?;
        Ok(Self::from_array(heights))
    }

    /// Build a grid from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size_z = rows.len();
        let size_x = rows.first().map_or(0, |row| row.len());
        if let Some(bad) = rows.iter().position(|row| row.len() != size_x) {
            return Err(Error::InvalidArgument(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                size_x
            )));
        }
        Self::from_row_major(size_z, size_x, rows.into_iter().flatten().collect())
    }

    /// Number of columns (X axis)
    pub fn size_x(&self) -> usize {
        self.heights.ncols()
    }

    /// Number of rows (Z axis)
    pub fn size_z(&self) -> usize {
        self.heights.nrows()
    }

    /// Check if the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.heights.get((row, col)).copied()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.heights
    }

    /// Smallest and largest height, or `None` for an empty grid
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some(self.heights.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &h| (min.min(h), max.max(h)),
        ))
    }
}

impl Index<(usize, usize)> for HeightGrid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.heights[index]
    }
}
