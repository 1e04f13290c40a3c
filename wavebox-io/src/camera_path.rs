//! Camera path documents
//!
//! A camera path is a JSON document of the form
//! `{"frames": [{"cameraLocation": {"x": .., "y": .., "z": ..}}, ...]}`.
//! Unknown keys are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use wavebox_core::{CameraLocation, Result};

use crate::error::IoError;

/// One recorded camera frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraFrame {
    pub camera_location: CameraLocation,
}

/// A recorded sequence of camera frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPath {
    frames: Vec<CameraFrame>,
}

impl CameraPath {
    /// Build a path from frames, rejecting an empty sequence
    pub fn new(frames: Vec<CameraFrame>) -> Result<Self> {
        Ok(Self::checked(frames)?)
    }

    fn checked(frames: Vec<CameraFrame>) -> std::result::Result<Self, IoError> {
        if frames.is_empty() {
            return Err(IoError::EmptyPath);
        }
        Ok(Self { frames })
    }

    /// Parse a camera path from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let path: CameraPath = serde_json::from_reader(reader).map_err(IoError::from)?;
        Ok(Self::checked(path.frames)?)
    }

    /// Parse a camera path from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let path: CameraPath = serde_json::from_str(json).map_err(IoError::from)?;
        Ok(Self::checked(path.frames)?)
    }

    /// Read a camera path from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let file = File::open(path).map_err(IoError::from)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn frames(&self) -> &[CameraFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame selected by a fractional playback counter, wrapping cyclically
    pub fn frame_at(&self, counter: f64) -> Option<&CameraFrame> {
        frame_index(counter, self.frames.len()).map(|i| &self.frames[i])
    }
}

/// Index selected by a fractional playback counter: `floor(counter) mod len`
///
/// Returns `None` for an empty sequence or a NaN counter.
pub fn frame_index(counter: f64, len: usize) -> Option<usize> {
    if len == 0 || counter.is_nan() {
        return None;
    }
    Some(counter.floor().rem_euclid(len as f64) as usize)
}

/// Load a camera path, logging and returning `None` if it cannot be used
///
/// Camera replay is optional; a missing or malformed document only disables it.
pub fn load_camera_path_or_skip<P: AsRef<Path>>(path: P) -> Option<CameraPath> {
    let path = path.as_ref();
    match CameraPath::from_path(path) {
        Ok(camera_path) => {
            log::info!(
                "Loaded camera animation data: {} frames from {}",
                camera_path.len(),
                path.display()
            );
            Some(camera_path)
        }
        Err(e) => {
            log::warn!("No camera animation data ({}): {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavebox_core::Error;

    const THREE_FRAMES: &str = r#"{
        "frames": [
            {"cameraLocation": {"x": 1.0, "y": 2.0, "z": 3.0}},
            {"cameraLocation": {"x": 4.0, "y": 5.0, "z": 6.0}, "time": 16.6},
            {"cameraLocation": {"x": 7.0, "y": 8.0, "z": 9.0}}
        ],
        "version": 2
    }"#;

    #[test]
    fn test_parse_camera_path() {
        let path = CameraPath::from_json_str(THREE_FRAMES).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.frames()[1].camera_location, CameraLocation::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_from_reader() {
        let path = CameraPath::from_reader(THREE_FRAMES.as_bytes()).unwrap();
        assert_eq!(path.frames()[2].camera_location.z, 9.0);
    }

    #[test]
    fn test_frame_index_wraps() {
        let n = 4;
        assert_eq!(frame_index(0.0, n), Some(0));
        assert_eq!(frame_index(1.5, n), Some(1));
        assert_eq!(frame_index(3.99, n), Some(3));
        assert_eq!(frame_index(n as f64, n), Some(0));
        assert_eq!(frame_index(n as f64 + 1.5, n), Some(1));
        assert_eq!(frame_index(2.0 * n as f64, n), Some(0));
        assert_eq!(frame_index(1.0, 0), None);
        assert_eq!(frame_index(f64::NAN, n), None);
    }

    #[test]
    fn test_frame_at() {
        let path = CameraPath::from_json_str(THREE_FRAMES).unwrap();
        let frame = path.frame_at(4.5).unwrap();
        assert_eq!(frame.camera_location.x, 4.0);
    }

    #[test]
    fn test_empty_frames_unavailable() {
        let result = CameraPath::from_json_str(r#"{"frames": []}"#);
        assert!(matches!(result, Err(Error::ResourceUnavailable(_))));
        assert!(CameraPath::new(Vec::new()).is_err());
    }

    #[test]
    fn test_malformed_json_unavailable() {
        let result = CameraPath::from_json_str(r#"{"frames": [{"cameraLocation": 3}]}"#);
        assert!(matches!(result, Err(Error::ResourceUnavailable(_))));

        let result = CameraPath::from_json_str("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let result = CameraPath::from_path("definitely/not/here.json");
        assert!(matches!(result, Err(Error::ResourceUnavailable(_))));
        assert!(load_camera_path_or_skip("definitely/not/here.json").is_none());
    }
}
