//! In-memory rendering collaborators for headless runs

use std::collections::HashMap;

use wavebox_core::{BoxDescriptor, BoxSeriesStyle, CameraController, CameraLocation, RenderSurface, Result};

/// A surface that keeps the current box set keyed by id
///
/// Counts how many boxes each frame created versus updated in place, which
/// makes the stable-id contract observable.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    boxes: HashMap<String, BoxDescriptor>,
    style: Option<BoxSeriesStyle>,
    frames: u64,
    created: u64,
    updated: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style received through [`RenderSurface::configure`]
    pub fn style(&self) -> Option<&BoxSeriesStyle> {
        self.style.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&BoxDescriptor> {
        self.boxes.get(id)
    }

    /// Number of distinct boxes currently held
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Frames received
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Boxes that were new when upserted
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Boxes that replaced an existing id
    pub fn updated(&self) -> u64 {
        self.updated
    }

    /// Current boxes ordered by numeric id
    pub fn snapshot(&self) -> Vec<BoxDescriptor> {
        let mut boxes: Vec<BoxDescriptor> = self.boxes.values().cloned().collect();
        boxes.sort_by(|a, b| {
            let ka = a.id.parse::<u64>().ok();
            let kb = b.id.parse::<u64>().ok();
            ka.cmp(&kb).then_with(|| a.id.cmp(&b.id))
        });
        boxes
    }
}

impl RenderSurface for MemorySurface {
    fn configure(&mut self, style: &BoxSeriesStyle) -> Result<()> {
        self.style = Some(style.clone());
        Ok(())
    }

    fn invalidate_data(&mut self, boxes: &[BoxDescriptor]) -> Result<()> {
        for desc in boxes {
            match self.boxes.insert(desc.id.clone(), desc.clone()) {
                Some(_) => self.updated += 1,
                None => self.created += 1,
            }
        }
        self.frames += 1;
        Ok(())
    }
}

/// Camera controller that records every location it receives
#[derive(Debug, Default, Clone)]
pub struct CameraTrace {
    locations: Vec<CameraLocation>,
}

impl CameraTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> &[CameraLocation] {
        &self.locations
    }

    pub fn last(&self) -> Option<&CameraLocation> {
        self.locations.last()
    }
}

impl CameraController for CameraTrace {
    fn set_camera_location(&mut self, location: &CameraLocation) {
        self.locations.push(*location);
    }
}
