//! # Wavebox Algorithms
//!
//! Deterministic height-field generation and per-frame box composition.
//!
//! The [`heightfield`] module superimposes damped radial cosine waves into a
//! static [`HeightGrid`](wavebox_core::HeightGrid); the [`compositor`] module
//! perturbs that grid with travelling sine waves each frame and lays it out
//! as a series of ground-standing boxes with stable ids.

pub mod heightfield;
pub mod compositor;

// Re-export commonly used items
pub use heightfield::*;
pub use compositor::*;
