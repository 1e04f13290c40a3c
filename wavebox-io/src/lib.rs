//! I/O operations for wavebox scenes
//! 
//! This crate reads the externally authored camera-path documents that drive
//! camera replay. Failures surface as [`wavebox_core::Error::ResourceUnavailable`]
//! so callers can treat a missing path as a disabled feature rather than a
//! fatal error.

pub mod camera_path;
pub mod error;

pub use camera_path::*;
pub use error::*;
