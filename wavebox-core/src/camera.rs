//! Camera locations consumed by camera controllers

use serde::{Deserialize, Serialize};

use crate::point::Point3d;

/// Position of the scene camera in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CameraLocation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the world origin
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<CameraLocation> for Point3d {
    fn from(loc: CameraLocation) -> Self {
        Point3d::new(loc.x, loc.y, loc.z)
    }
}

impl From<Point3d> for CameraLocation {
    fn from(point: Point3d) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}
