use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use site_core::{contain_fit, MaskShape, MaskShapes};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Reveal compositor: draws the hidden image clipped to the union of
/// the primary blob ellipse and the live trail circles. Until the image
/// finishes loading it renders nothing, leaving the base layer visible.
pub struct RevealRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    image: web::HtmlImageElement,
    loaded: Rc<Cell<bool>>,
}

impl RevealRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, src: &str) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let image = web::HtmlImageElement::new()
            .map_err(|e| anyhow::anyhow!("create image element: {e:?}"))?;
        let loaded = Rc::new(Cell::new(false));

        let loaded_onload = loaded.clone();
        let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            loaded_onload.set(true);
            log::info!("[assets] reveal image loaded");
        }));
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_src(src);
        onload.forget();

        Ok(Self {
            canvas,
            ctx,
            image,
            loaded,
        })
    }

    /// Recomposite one frame. The clip union is rebuilt from scratch —
    /// blob and trail state change continuously, so nothing is cached.
    pub fn draw(&self, shapes: &MaskShapes, viewport: Vec2) {
        dom::sync_canvas_to_viewport(&self.canvas, viewport);
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        if !self.loaded.get() || shapes.is_empty() {
            return;
        }

        self.ctx.save();
        self.ctx.begin_path();
        for shape in shapes {
            match *shape {
                MaskShape::Ellipse {
                    center,
                    radius_x,
                    radius_y,
                } => {
                    let _ = self.ctx.ellipse(
                        center.x as f64,
                        center.y as f64,
                        radius_x as f64,
                        radius_y as f64,
                        0.0,
                        0.0,
                        TAU,
                    );
                }
                MaskShape::Circle { center, radius } => {
                    // Move first so subpaths stay disjoint.
                    self.ctx
                        .move_to((center.x + radius) as f64, center.y as f64);
                    let _ = self
                        .ctx
                        .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                }
            }
        }
        self.ctx.clip();

        let natural = Vec2::new(
            self.image.natural_width() as f32,
            self.image.natural_height() as f32,
        );
        let fit = contain_fit(natural, viewport);
        if fit.width > 0.0 && fit.height > 0.0 {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.image,
                fit.x as f64,
                fit.y as f64,
                fit.width as f64,
                fit.height as f64,
            );
        }
        self.ctx.restore();
    }
}
