//! Core data structures and traits for wavebox
//! 
//! This crate provides the fundamental types shared by the height-field
//! generator, the frame compositor and the animation runtime: oscillators,
//! height grids, box descriptors, color look-up tables, camera locations,
//! and the traits implemented by external rendering collaborators.

pub mod point;
pub mod grid;
pub mod boxes;
pub mod lut;
pub mod camera;
pub mod traits;
pub mod error;

pub use point::*;
pub use grid::*;
pub use boxes::*;
pub use lut::*;
pub use camera::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
