//! Error types for wavebox

use thiserror::Error;

/// Main error type for wavebox operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed generator, compositor or configuration parameters
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    
    /// An optional external resource (camera path, config file) could not be used
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),
    
    /// Failure reported by a rendering surface or camera collaborator
    #[error("Surface error: {0}")]
    Surface(String),
    
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for wavebox operations
pub type Result<T> = std::result::Result<T, Error>;
