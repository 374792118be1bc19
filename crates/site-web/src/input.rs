use glam::Vec2;
use site_core::Rect;
use web_sys as web;

/// Pointer event position in client pixels.
#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Current bounding box of an element as a core `Rect`. Queried fresh
/// on registration and on resize, never cached across layout changes.
#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.right() as f32,
        r.bottom() as f32,
    )
}
