//! Platform-neutral simulation core for the reveal-site landing page.
//!
//! Everything here is pure state plus step functions; the wasm frontend
//! in `site-web` owns the timers, the DOM and the canvases.

pub mod constants;
pub mod geometry;
pub mod pointer;
pub mod proximity;
pub mod scene;
pub mod trail;
pub mod wave;

pub use constants::*;
pub use geometry::{circle_contains_point, circle_overlaps_rect, contain_fit, ContainFit, Rect};
pub use pointer::{PointerTracker, TrailSpawn};
pub use proximity::{ProximityRegistry, RegionId};
pub use scene::{MaskShape, MaskShapes, SceneState};
pub use trail::{TrailBlob, TrailSet};
pub use wave::{pointer_influence, WaveField, WaveParams};
