//! Box descriptors emitted to rendering surfaces

use serde::{Deserialize, Serialize};

use crate::point::{Point3d, Vector3d};

/// One positioned, sized box of a box series
///
/// `id` is a stable key so a rendering surface can update the primitive it
/// created on an earlier frame instead of allocating a new one. `value` is
/// the color look-up value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BoxRecord", from = "BoxRecord")]
pub struct BoxDescriptor {
    pub id: String,
    pub center: Point3d,
    pub size: Vector3d,
    pub value: Option<f64>,
}

impl BoxDescriptor {
    /// Create a box standing on the ground plane at `(x, z)` with the given height
    ///
    /// The centre is placed at half the height so the bottom face sits on `y = 0`.
    pub fn column(id: impl Into<String>, x: f64, z: f64, footprint: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            center: Point3d::new(x, height / 2.0, z),
            size: Vector3d::new(footprint, height, footprint),
            value: Some(height),
        }
    }

    /// Height of the box along Y
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Minimum and maximum corners
    pub fn bounds(&self) -> (Point3d, Point3d) {
        let half = self.size / 2.0;
        (self.center - half, self.center + half)
    }
}

/// Flat wire representation used by rendering surfaces
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoxRecord {
    x_center: f64,
    y_center: f64,
    z_center: f64,
    x_size: f64,
    y_size: f64,
    z_size: f64,
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
}

impl From<BoxDescriptor> for BoxRecord {
    fn from(desc: BoxDescriptor) -> Self {
        Self {
            x_center: desc.center.x,
            y_center: desc.center.y,
            z_center: desc.center.z,
            x_size: desc.size.x,
            y_size: desc.size.y,
            z_size: desc.size.z,
            id: desc.id,
            value: desc.value,
        }
    }
}

impl From<BoxRecord> for BoxDescriptor {
    fn from(record: BoxRecord) -> Self {
        Self {
            id: record.id,
            center: Point3d::new(record.x_center, record.y_center, record.z_center),
            size: Vector3d::new(record.x_size, record.y_size, record.z_size),
            value: record.value,
        }
    }
}
