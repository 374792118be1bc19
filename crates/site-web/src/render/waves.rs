use glam::Vec2;
use site_core::{pointer_influence, WaveField, WAVE_COUNT, WAVE_SAMPLE_STEP};
use web_sys as web;

use crate::{dom, style};

/// Background wave-field renderer: five layered sine strokes across the
/// full viewport width, redrawn every frame on its own canvas.
pub struct WaveRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl WaveRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Clear and redraw all strokes. `raw` is the raw pointer position
    /// (sentinel included); it shifts amplitude and adds a slow
    /// horizontal term.
    pub fn draw(&self, waves: &WaveField, raw: Vec2, viewport: Vec2) {
        dom::sync_canvas_to_viewport(&self.canvas, viewport);
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        self.ctx
            .clear_rect(0.0, 0.0, width as f64, height as f64);
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }

        let influence = pointer_influence(raw, viewport);
        for i in 0..WAVE_COUNT {
            let params = WaveField::params(i, height, influence);
            self.ctx.begin_path();
            self.ctx
                .set_stroke_style_str(&style::white_alpha(params.alpha));
            self.ctx.set_line_width(1.0);

            // 2px sampling keeps the per-frame cost low at full width.
            let mut x = 0.0;
            while x < width {
                let y = waves.sample(i, x, height, influence);
                if x == 0.0 {
                    self.ctx.move_to(x as f64, y as f64);
                } else {
                    self.ctx.line_to(x as f64, y as f64);
                }
                x += WAVE_SAMPLE_STEP;
            }
            self.ctx.stroke();
        }
    }
}
