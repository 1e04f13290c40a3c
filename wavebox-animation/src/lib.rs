//! Animation runtime for wavebox scenes
//! 
//! This crate drives a water-drop box series frame by frame:
//! - Animation sessions owning the height grid, clock and camera toggle
//! - Cyclic camera path replay
//! - An explicit frame scheduler with injectable frame sources and cancellation
//! - Scene configuration loaded from JSON
//! - In-memory surfaces for headless runs

pub mod clock;
pub mod replay;
pub mod session;
pub mod scheduler;
pub mod config;
pub mod surface;

pub use clock::*;
pub use replay::*;
pub use session::*;
pub use scheduler::*;
pub use config::*;
pub use surface::*;
