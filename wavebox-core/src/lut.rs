//! Color look-up tables and box series styling

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRgba(pub [u8; 4]);

impl ColorRgba {
    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    pub fn a(&self) -> u8 {
        self.0[3]
    }

    /// Channel-wise linear blend, `t` clamped to `[0, 1]`
    pub fn lerp(&self, other: &ColorRgba, t: f64) -> ColorRgba {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let a = self.0[i] as f64;
            let b = other.0[i] as f64;
            *channel = (a + (b - a) * t).round() as u8;
        }
        ColorRgba(out)
    }
}

/// A single value → color step of a look-up table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LutStep {
    pub value: f64,
    pub color: ColorRgba,
}

/// Value-to-color mapping with optional interpolation between steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLut")]
pub struct ColorLut {
    steps: Vec<LutStep>,
    interpolate: bool,
}

#[derive(Deserialize)]
struct RawLut {
    steps: Vec<LutStep>,
    #[serde(default)]
    interpolate: bool,
}

impl TryFrom<RawLut> for ColorLut {
    type Error = Error;

    fn try_from(raw: RawLut) -> Result<Self> {
        ColorLut::new(raw.steps, raw.interpolate)
    }
}

impl ColorLut {
    /// Create a look-up table
    ///
    /// Steps must be non-empty, finite and sorted by ascending value.
    pub fn new(steps: Vec<LutStep>, interpolate: bool) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::InvalidArgument(
                "color look-up table needs at least one step".to_string(),
            ));
        }
        if steps.iter().any(|s| !s.value.is_finite()) {
            return Err(Error::InvalidArgument(
                "color look-up table step values must be finite".to_string(),
            ));
        }
        if steps.windows(2).any(|w| w[0].value > w[1].value) {
            return Err(Error::InvalidArgument(
                "color look-up table steps must be sorted by value".to_string(),
            ));
        }
        Ok(Self { steps, interpolate })
    }

    /// Black → yellow → orange → red palette over heights 0..100
    pub fn water_drop() -> Self {
        Self {
            steps: vec![
                LutStep { value: 0.0, color: ColorRgba::rgb(0, 0, 0) },
                LutStep { value: 30.0, color: ColorRgba::rgb(255, 255, 0) },
                LutStep { value: 45.0, color: ColorRgba::rgb(255, 204, 0) },
                LutStep { value: 60.0, color: ColorRgba::rgb(255, 128, 0) },
                LutStep { value: 100.0, color: ColorRgba::rgb(255, 0, 0) },
            ],
            interpolate: true,
        }
    }

    pub fn steps(&self) -> &[LutStep] {
        &self.steps
    }

    pub fn interpolate(&self) -> bool {
        self.interpolate
    }

    /// Look up the color for `value`
    ///
    /// Values outside the step range take the nearest end color. Without
    /// interpolation the step at or below `value` wins.
    pub fn color_at(&self, value: f64) -> ColorRgba {
        let first = self.steps[0];
        let last = self.steps[self.steps.len() - 1];
        if value.is_nan() || value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }

        // First step strictly above the value; always in 1..len here
        let upper = self.steps.partition_point(|s| s.value <= value);
        let lo = self.steps[upper - 1];
        let hi = self.steps[upper];

        if !self.interpolate || hi.value == lo.value {
            return lo.color;
        }
        let t = (value - lo.value) / (hi.value - lo.value);
        lo.color.lerp(&hi.color, t)
    }
}

impl Default for ColorLut {
    fn default() -> Self {
        Self::water_drop()
    }
}

/// Styling handed to a rendering surface once before the first frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSeriesStyle {
    /// Paletted fill keyed on each box's `value`
    pub palette: ColorLut,
    /// Edge roundness; `None` renders sharp boxes
    pub rounded_edges: Option<f64>,
}

impl Default for BoxSeriesStyle {
    fn default() -> Self {
        Self {
            palette: ColorLut::water_drop(),
            rounded_edges: Some(0.4),
        }
    }
}
