use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in client pixels. Falls back to zero when unavailable,
/// which downstream code treats as "draw nothing this frame".
pub fn viewport_size() -> Vec2 {
    let Some(window) = web::window() else {
        return Vec2::ZERO;
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Resize a canvas backing store to the viewport. All mask and hit
/// geometry is in client pixels, so the backing store tracks CSS pixels
/// one-to-one. Idempotent.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement, viewport: Vec2) {
    let w = (viewport.x as u32).max(1);
    let h = (viewport.y as u32).max(1);
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{id} is not a canvas"))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("#{id} is not an html element"))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))
}

#[inline]
pub fn add_click_listener(element: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
