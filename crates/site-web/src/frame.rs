use std::cell::{Cell, RefCell};
use std::rc::Rc;

use site_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::content::ContentElements;
use crate::render::reveal::RevealRenderer;
use crate::render::waves::WaveRenderer;

/// Handle to a self-rescheduling animation-frame loop. The closure is
/// kept alive by its own scheduling cycle; `cancel` breaks the cycle
/// and revokes the pending frame.
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(window), Some(id)) = (web::window(), self.raf_id.get()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

/// Start an animation-frame loop that calls `tick_fn` once per frame
/// until cancelled.
pub fn start_loop(mut tick_fn: impl FnMut() + 'static) -> LoopHandle {
    let cancelled = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(None::<i32>));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        tick_fn();
        if let Some(window) = web::window() {
            if let Ok(id) = window.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        if let Ok(id) = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }

    LoopHandle { cancelled, raf_id }
}

/// Handle to a fixed-period interval timer. Owns its closure so the
/// callback stays valid for as long as the handle lives.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn cancel(&self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Start a fixed-period timer, independent of the animation-frame rate.
pub fn start_interval(
    period_ms: i32,
    mut tick_fn: impl FnMut() + 'static,
) -> anyhow::Result<IntervalHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || tick_fn()) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .map_err(|e| anyhow::anyhow!("set_interval failed: {e:?}"))?;
    Ok(IntervalHandle {
        id,
        _closure: closure,
    })
}

/// Per-frame driver A: pointer smoothing, proximity flags, the reveal
/// composite, parallax transforms and the cursor dot.
pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub reveal: RevealRenderer,
    pub content: Rc<RefCell<ContentElements>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (shapes, parallax, raw, active, viewport) = {
            let mut scene = self.scene.borrow_mut();
            scene.step_smoothing();
            (
                scene.mask_shapes(),
                scene.pointer.parallax,
                scene.pointer.raw,
                scene.pointer.active,
                scene.viewport,
            )
        };
        self.reveal.draw(&shapes, viewport);

        let mut content = self.content.borrow_mut();
        content.apply_proximity(&self.scene.borrow());
        content.apply_parallax(parallax);
        content.update_cursor(raw, active);
    }
}

/// Per-frame driver B: wave phase advance and redraw.
pub struct WaveContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub renderer: WaveRenderer,
}

impl WaveContext {
    pub fn frame(&mut self) {
        let (waves, raw, viewport) = {
            let mut scene = self.scene.borrow_mut();
            scene.step_wave();
            (scene.waves, scene.pointer.raw, scene.viewport)
        };
        self.renderer.draw(&waves, raw, viewport);
    }
}

/// Cancel every periodic driver when the page is dismantled.
pub fn wire_teardown(loops: Vec<LoopHandle>, interval: IntervalHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        for handle in &loops {
            handle.cancel();
        }
        interval.cancel();
        log::info!("[teardown] periodic drivers cancelled");
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
