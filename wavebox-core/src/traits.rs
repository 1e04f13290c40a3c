//! Traits implemented by external rendering collaborators

use crate::{boxes::BoxDescriptor, camera::CameraLocation, lut::BoxSeriesStyle, error::Result};

/// A surface that draws a box series
///
/// Boxes are upserted by id: a box whose id was seen on a previous frame
/// replaces that primitive in place.
pub trait RenderSurface {
    /// Apply series styling before the first frame
    fn configure(&mut self, _style: &BoxSeriesStyle) -> Result<()> {
        Ok(())
    }

    /// Upsert the given boxes by id
    fn invalidate_data(&mut self, boxes: &[BoxDescriptor]) -> Result<()>;
}

/// Trait for anything that can move the scene camera
pub trait CameraController {
    /// Move the camera to `location`
    fn set_camera_location(&mut self, location: &CameraLocation);
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn configure(&mut self, style: &BoxSeriesStyle) -> Result<()> {
        (**self).configure(style)
    }

    fn invalidate_data(&mut self, boxes: &[BoxDescriptor]) -> Result<()> {
        (**self).invalidate_data(boxes)
    }
}

impl<T: CameraController + ?Sized> CameraController for &mut T {
    fn set_camera_location(&mut self, location: &CameraLocation) {
        (**self).set_camera_location(location)
    }
}

/// Camera controller that ignores every location
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCamera;

impl CameraController for NoCamera {
    fn set_camera_location(&mut self, _location: &CameraLocation) {}
}
