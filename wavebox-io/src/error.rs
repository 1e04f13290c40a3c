//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while reading scene resources
#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },
    
    #[error("Parse error: {message}")]
    ParseError { message: String },
    
    #[error("Camera path has no frames")]
    EmptyPath,
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::ParseError {
            message: e.to_string(),
        }
    }
}

impl From<IoError> for wavebox_core::Error {
    fn from(e: IoError) -> Self {
        wavebox_core::Error::ResourceUnavailable(e.to_string())
    }
}
