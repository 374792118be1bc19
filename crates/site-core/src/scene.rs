use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{BLOB_RADIUS_X, BLOB_RADIUS_Y, CURSOR_PROXIMITY_RADIUS, TRAIL_CAPACITY};
use crate::geometry::{circle_overlaps_rect, Rect};
use crate::pointer::PointerTracker;
use crate::proximity::ProximityRegistry;
use crate::trail::TrailSet;
use crate::wave::WaveField;

/// One element of the reveal clip union.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskShape {
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
    },
}

pub type MaskShapes = SmallVec<[MaskShape; TRAIL_CAPACITY + 1]>;

/// The whole simulation in one owned struct.
///
/// Three independent periodic drivers mutate it from a single logical
/// thread: per-frame smoothing, per-frame wave advance, and the fixed
/// 30 ms trail decay tick. Each driver calls exactly one step function,
/// so the state is deterministic under test without real timers.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub pointer: PointerTracker,
    pub trails: TrailSet,
    pub waves: WaveField,
    pub proximity: ProximityRegistry,
    pub viewport: Vec2,
}

impl SceneState {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pointer: PointerTracker::new(),
            trails: TrailSet::new(),
            waves: WaveField::new(),
            proximity: ProximityRegistry::new(),
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Pointer-move: update raw state and spawn a trail when warranted.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Some(spawn) = self.pointer.pointer_move(pos, self.viewport) {
            self.trails.spawn(spawn);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.pointer_leave();
    }

    /// Frame driver A: move the smoothed position and refresh the
    /// proximity flags it gates.
    pub fn step_smoothing(&mut self) {
        self.pointer.step_smoothing();
        self.proximity.recompute(self.pointer.smoothed);
    }

    /// Frame driver B: advance the wave phase.
    pub fn step_wave(&mut self) {
        self.waves.step();
    }

    /// Timer driver: one trail decay tick.
    pub fn step_decay(&mut self) {
        self.trails.step_decay();
    }

    /// Generic blob hit-test against an arbitrary rectangle, using the
    /// default blob radius rather than a registered region's.
    pub fn is_blob_over(&self, rect: &Rect) -> bool {
        circle_overlaps_rect(self.pointer.smoothed, CURSOR_PROXIMITY_RADIUS, rect)
    }

    /// The clip union for the reveal compositor, rebuilt fresh every
    /// frame: the primary ellipse (only while the pointer is over the
    /// surface) plus one circle per live trail.
    pub fn mask_shapes(&self) -> MaskShapes {
        let mut shapes = MaskShapes::new();
        if self.pointer.active {
            shapes.push(MaskShape::Ellipse {
                center: self.pointer.smoothed,
                radius_x: BLOB_RADIUS_X,
                radius_y: BLOB_RADIUS_Y,
            });
        }
        for blob in self.trails.iter() {
            shapes.push(MaskShape::Circle {
                center: blob.position,
                radius: blob.size / 2.0,
            });
        }
        shapes
    }
}
