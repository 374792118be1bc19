use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{
    TRAIL_CAPACITY, TRAIL_OPACITY_DECAY, TRAIL_SIZE_DECAY, TRAIL_SPAWN_OPACITY,
};
use crate::pointer::TrailSpawn;

/// One transient reveal circle left behind by fast pointer motion.
///
/// Ids are monotonic and never reused; they exist only so consumers can
/// diff the list between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailBlob {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub id: u64,
}

/// Insertion-ordered set of trail blobs, capped to the most recent
/// [`TRAIL_CAPACITY`]. Decay runs on its own fixed-interval tick,
/// independent of spawning and of the render loops.
#[derive(Clone, Debug, Default)]
pub struct TrailSet {
    blobs: SmallVec<[TrailBlob; TRAIL_CAPACITY]>,
    next_id: u64,
}

impl TrailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh blob; the oldest is dropped once the set would
    /// exceed capacity. Trimming happens at insertion, not at decay.
    pub fn spawn(&mut self, spawn: TrailSpawn) {
        self.blobs.push(TrailBlob {
            position: spawn.position,
            size: spawn.size,
            opacity: TRAIL_SPAWN_OPACITY,
            id: self.next_id,
        });
        self.next_id += 1;
        if self.blobs.len() > TRAIL_CAPACITY {
            self.blobs.remove(0);
            log::trace!("[trail] at capacity, dropped oldest");
        }
    }

    /// One 30 ms decay tick: fade and shrink every blob, prune the dead.
    /// A no-op on an empty set.
    pub fn step_decay(&mut self) {
        for blob in &mut self.blobs {
            blob.opacity -= TRAIL_OPACITY_DECAY;
            blob.size *= TRAIL_SIZE_DECAY;
        }
        self.blobs.retain(|blob| blob.opacity > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailBlob> {
        self.blobs.iter()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
