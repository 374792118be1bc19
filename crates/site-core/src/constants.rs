use glam::Vec2;

// Shared tuning constants for the reveal effect. Values are carried over
// from the tuned production page; treat them as empirical.

// Pointer tracking
pub const SMOOTHING_FACTOR: f32 = 0.12; // per-frame lerp toward the raw position
pub const POINTER_SENTINEL: [f32; 2] = [-200.0, -200.0]; // off-canvas resting position
pub const PARALLAX_FACTOR: f32 = -0.02; // displacement-from-center to layer offset
pub const CONTENT_PARALLAX_GAIN: f32 = 1.5; // content layer moves more than the images

// Trail spawning and decay
pub const TRAIL_SPAWN_VELOCITY: f32 = 8.0; // px per pointer event
pub const TRAIL_BASE_SIZE: f32 = 40.0;
pub const TRAIL_VELOCITY_GAIN: f32 = 0.5;
pub const TRAIL_MAX_SIZE: f32 = 80.0;
pub const TRAIL_SPAWN_OPACITY: f32 = 0.6;
pub const TRAIL_OPACITY_DECAY: f32 = 0.03; // subtracted per tick
pub const TRAIL_SIZE_DECAY: f32 = 0.97; // multiplied per tick
pub const TRAIL_CAPACITY: usize = 16; // 15 retained + the newest
pub const TRAIL_DECAY_INTERVAL_MS: i32 = 30;

// Wave field
pub const WAVE_COUNT: usize = 5;
pub const WAVE_PHASE_INCREMENT: f32 = 0.008; // per rendered frame
pub const WAVE_SAMPLE_STEP: f32 = 2.0; // horizontal px between samples
pub const WAVE_BASE_AMPLITUDE: f32 = 20.0;
pub const WAVE_AMPLITUDE_STEP: f32 = 10.0;
pub const WAVE_BASE_FREQUENCY: f32 = 0.003;
pub const WAVE_FREQUENCY_STEP: f32 = 0.0003;
pub const WAVE_BASELINE_START: f32 = 0.3; // fraction of viewport height
pub const WAVE_BASELINE_STEP: f32 = 0.12;
pub const WAVE_BASE_ALPHA: f32 = 0.03;
pub const WAVE_ALPHA_STEP: f32 = 0.01;
pub const POINTER_INFLUENCE: f32 = 0.02; // raw-position modulation of the waves

// Reveal blob
pub const BLOB_RADIUS_X: f32 = 85.0;
pub const BLOB_RADIUS_Y: f32 = 75.0;

// Proximity hit-testing
pub const ELEMENT_PROXIMITY_RADIUS: f32 = 90.0; // name, nav control, social group
pub const CURSOR_PROXIMITY_RADIUS: f32 = 80.0; // generic blob hit-test radius

#[inline]
pub fn pointer_sentinel() -> Vec2 {
    Vec2::new(POINTER_SENTINEL[0], POINTER_SENTINEL[1])
}
