use glam::Vec2;

use crate::constants::{
    POINTER_INFLUENCE, WAVE_ALPHA_STEP, WAVE_AMPLITUDE_STEP, WAVE_BASELINE_START,
    WAVE_BASELINE_STEP, WAVE_BASE_ALPHA, WAVE_BASE_AMPLITUDE, WAVE_BASE_FREQUENCY,
    WAVE_FREQUENCY_STEP, WAVE_PHASE_INCREMENT,
};

// Both `phase` and `1.5 * phase` feed sine arguments, so the smallest
// wrap period that keeps every stroke continuous is 4π.
const PHASE_PERIOD: f32 = 4.0 * std::f32::consts::PI;

/// Pointer modulation of the wave field: a small fraction of the raw
/// pointer's displacement from the viewport center. Matches the source
/// page, which feeds the off-canvas sentinel through unchanged.
#[inline]
pub fn pointer_influence(raw: Vec2, viewport: Vec2) -> Vec2 {
    if !raw.is_finite() || viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (raw - viewport * 0.5) * POINTER_INFLUENCE
}

/// Per-wave sampling parameters for one frame.
#[derive(Clone, Copy, Debug)]
pub struct WaveParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub baseline: f32,
    pub alpha: f32,
}

/// Phase accumulator for the background wave field. Advanced a fixed
/// increment once per rendered frame, wrapped to avoid precision drift
/// over long sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaveField {
    phase: f32,
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.phase = (self.phase + WAVE_PHASE_INCREMENT) % PHASE_PERIOD;
    }

    /// Parameters for wave `index` (0-based) given the current viewport
    /// and pointer influence.
    pub fn params(index: usize, viewport_height: f32, influence: Vec2) -> WaveParams {
        let i = index as f32;
        WaveParams {
            amplitude: WAVE_BASE_AMPLITUDE + WAVE_AMPLITUDE_STEP * i + influence.y,
            frequency: WAVE_BASE_FREQUENCY - WAVE_FREQUENCY_STEP * i,
            baseline: viewport_height * (WAVE_BASELINE_START + WAVE_BASELINE_STEP * i),
            alpha: WAVE_BASE_ALPHA + WAVE_ALPHA_STEP * i,
        }
    }

    /// Vertical position of wave `index` at horizontal position `x`:
    /// a primary sine, a faster half-amplitude harmonic, and a slow
    /// horizontal pointer term.
    pub fn sample(&self, index: usize, x: f32, viewport_height: f32, influence: Vec2) -> f32 {
        let p = Self::params(index, viewport_height, influence);
        let i = index as f32;
        p.baseline
            + (x * p.frequency + self.phase + i).sin() * p.amplitude
            + (x * p.frequency * 2.0 + self.phase * 1.5).sin() * (p.amplitude * 0.3)
            + influence.x * (x * 0.01).sin()
    }
}
