// Pure CSS string builders, kept free of web-sys so they can be tested
// host-side (the crate itself only compiles for wasm32).

/// `translate(Xpx, Ypx)` for layer parallax transforms.
#[inline]
pub fn translate_px(x: f32, y: f32) -> String {
    format!("translate({x:.2}px, {y:.2}px)")
}

/// White stroke color with the given alpha, clamped to [0, 1].
#[inline]
pub fn white_alpha(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", alpha.clamp(0.0, 1.0))
}

/// Pixel length for style properties.
#[inline]
pub fn px(value: f32) -> String {
    format!("{value:.1}px")
}
