//! # wavebox
//!
//! Animated water-drop height fields rendered as 3D box series.
//!
//! This is the umbrella crate that provides convenient access to all wavebox
//! functionality. You can use this crate to get everything in one place, or
//! use individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Data model (HeightGrid, BoxDescriptor, ColorLut, ...) and collaborator traits
//! - **Algorithms**: Water-drop generation and per-frame box composition
//! - **I/O**: Camera path documents
//! - **Animation**: Sessions, camera replay and frame scheduling
//!
//! ## Quick Start
//!
//! ```rust
//! use wavebox::prelude::*;
//!
//! fn main() -> wavebox::Result<()> {
//!     let mut session = AnimationSession::new(&SceneConfig::default())?;
//!     let mut surface = MemorySurface::new();
//!     let token = CancellationToken::new();
//!
//!     FrameScheduler::new(FrameBudget::new(3))
//!         .run(&mut session, &mut surface, &mut NoCamera, &token)?;
//!     assert_eq!(surface.len(), 100);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io and animation
//! - `algorithms`: Height-field generation and composition
//! - `io`: Camera path reading
//! - `animation`: Animation runtime (pulls in algorithms and io)
//! - `all`: Enables all features

// Re-export core functionality
pub use wavebox_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use wavebox_algorithms as algorithms;

#[cfg(feature = "io")]
pub use wavebox_io as io;

#[cfg(feature = "animation")]
pub use wavebox_animation as animation;

/// Convenient imports for common use cases
pub mod prelude {
    pub use wavebox_core::*;

    #[cfg(feature = "algorithms")]
    pub use wavebox_algorithms::*;

    #[cfg(feature = "io")]
    pub use wavebox_io::*;

    #[cfg(feature = "animation")]
    pub use wavebox_animation::*;
}
