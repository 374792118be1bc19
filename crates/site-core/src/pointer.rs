use glam::Vec2;

use crate::constants::{
    pointer_sentinel, PARALLAX_FACTOR, SMOOTHING_FACTOR, TRAIL_BASE_SIZE, TRAIL_MAX_SIZE,
    TRAIL_SPAWN_VELOCITY, TRAIL_VELOCITY_GAIN,
};

/// Request to spawn one trail blob, emitted when the pointer moves fast
/// enough. The trail set owns the blob from the moment it is spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSpawn {
    pub position: Vec2,
    pub size: f32,
}

/// Raw and smoothed pointer state plus the derived parallax offset.
///
/// `raw` is written synchronously on every pointer event; `smoothed`
/// only ever moves in `step_smoothing`, once per animation frame, and
/// converges toward `raw` without overshooting.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub active: bool,
    pub parallax: Vec2,
    last_raw: Vec2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            raw: pointer_sentinel(),
            smoothed: pointer_sentinel(),
            active: false,
            parallax: Vec2::ZERO,
            last_raw: Vec2::ZERO,
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer-move event at `pos` (client px). Returns a spawn
    /// request when the instantaneous velocity exceeds the threshold.
    /// Malformed coordinates degrade to a pointer-leave.
    pub fn pointer_move(&mut self, pos: Vec2, viewport: Vec2) -> Option<TrailSpawn> {
        if !pos.is_finite() {
            self.pointer_leave();
            return None;
        }

        let velocity = (pos - self.last_raw).length();
        self.raw = pos;
        self.active = true;
        self.last_raw = pos;

        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.parallax = (pos - viewport * 0.5) * PARALLAX_FACTOR;
        }

        (velocity > TRAIL_SPAWN_VELOCITY).then(|| TrailSpawn {
            position: pos,
            size: (TRAIL_BASE_SIZE + velocity * TRAIL_VELOCITY_GAIN).min(TRAIL_MAX_SIZE),
        })
    }

    /// Park the raw position off-canvas so every proximity test and the
    /// reveal mask resolve to "nothing under the cursor".
    pub fn pointer_leave(&mut self) {
        self.active = false;
        self.raw = pointer_sentinel();
    }

    /// One frame of exponential smoothing toward the raw position. Runs
    /// every animation frame whether or not the pointer moved, so the
    /// blob keeps settling after the pointer stops.
    pub fn step_smoothing(&mut self) {
        if !self.smoothed.is_finite() {
            self.smoothed = self.raw;
            return;
        }
        self.smoothed += (self.raw - self.smoothed) * SMOOTHING_FACTOR;
    }
}
