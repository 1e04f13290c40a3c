//! Fixed-step animation clock

/// Scalar animation time advanced by a fixed step once per frame
///
/// The clock is never reset; it only grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    t: f64,
    step: f64,
}

impl AnimationClock {
    /// Default per-frame increment
    pub const DEFAULT_STEP: f64 = 0.1;

    pub fn new(step: f64) -> Self {
        Self { t: 0.0, step }
    }

    /// Current time
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move to the next frame
    pub fn advance(&mut self) {
        self.t += self.step;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
