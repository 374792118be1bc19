use glam::Vec2;

use crate::geometry::{circle_overlaps_rect, Rect};

/// Handle to a registered proximity region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionId(usize);

#[derive(Clone, Copy, Debug)]
struct Region {
    rect: Rect,
    radius: f32,
    under: bool,
}

/// Central registry of proximity-reactive regions.
///
/// Each reactive element registers its bounding box once and updates it
/// when layout shifts; flags are then recomputed in one pass whenever
/// the smoothed blob position changes. Transitions are level-triggered:
/// every recompute evaluates every region from scratch, so rapid
/// back-and-forth motion cannot miss a state change.
#[derive(Clone, Debug, Default)]
pub struct ProximityRegistry {
    regions: Vec<Region>,
}

impl ProximityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rect: Rect, radius: f32) -> RegionId {
        self.regions.push(Region {
            rect,
            radius,
            under: false,
        });
        log::debug!(
            "[proximity] registered region {} radius {}",
            self.regions.len() - 1,
            radius
        );
        RegionId(self.regions.len() - 1)
    }

    /// Replace a region's bounding box after a layout change or resize.
    pub fn update_bounds(&mut self, id: RegionId, rect: Rect) {
        if let Some(region) = self.regions.get_mut(id.0) {
            region.rect = rect;
        }
    }

    /// Recompute every flag against the blob center. A blob parked at
    /// the off-canvas sentinel clears all flags.
    pub fn recompute(&mut self, blob_center: Vec2) {
        for region in &mut self.regions {
            region.under = circle_overlaps_rect(blob_center, region.radius, &region.rect);
        }
    }

    pub fn is_under(&self, id: RegionId) -> bool {
        self.regions.get(id.0).map(|r| r.under).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
