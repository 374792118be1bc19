// DOM contract and presentation constants for the landing page effect.

// Element ids the effect binds to; the host page supplies these nodes.
pub const WAVE_CANVAS_ID: &str = "wave-canvas";
pub const REVEAL_CANVAS_ID: &str = "reveal-canvas";
pub const BASE_LAYER_ID: &str = "base-layer";
pub const CONTENT_LAYER_ID: &str = "content-layer";
pub const NAME_ID: &str = "site-name";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const SOCIAL_ID: &str = "social-links";
pub const CURSOR_ID: &str = "cursor-dot";

// Asset consumed by the reveal compositor
pub const REVEAL_IMAGE_SRC: &str = "/reveal.jpeg";

// Foreground inversion palette
pub const LIGHT_FOREGROUND: &str = "#ffffff";
pub const DARK_FOREGROUND: &str = "#000000";
pub const TEXT_GLOW: &str = "0 2px 20px rgba(0,0,0,0.3)";
pub const ICON_GLOW: &str = "drop-shadow(0 2px 8px rgba(0,0,0,0.3))";

// Transitions
pub const INVERT_TRANSITION: &str = "color 0.3s ease, text-shadow 0.3s ease, filter 0.3s ease";
pub const PARALLAX_TRANSITION: &str = "transform 0.1s ease-out";
pub const CURSOR_TRANSITION: &str = "opacity 0.3s ease";

// Cursor dot
pub const CURSOR_SIZE_PX: f32 = 16.0;
