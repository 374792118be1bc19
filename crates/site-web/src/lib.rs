#![cfg(target_arch = "wasm32")]
//! Web front-end for the reveal-site landing page.
//!
//! Binds the `site-core` simulation to the DOM: two animation-frame
//! loops (pointer smoothing + reveal composite, wave field), one 30 ms
//! decay timer, and pointer/resize listeners over shared state.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{SceneState, TRAIL_DECAY_INTERVAL_MS};
use wasm_bindgen::prelude::*;

mod constants;
mod content;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod style;

use constants::{REVEAL_CANVAS_ID, REVEAL_IMAGE_SRC, WAVE_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let viewport = dom::viewport_size();
    let scene = Rc::new(RefCell::new(SceneState::new(viewport)));

    let wave_canvas = dom::canvas_by_id(&document, WAVE_CANVAS_ID)?;
    let reveal_canvas = dom::canvas_by_id(&document, REVEAL_CANVAS_ID)?;
    let wave_renderer = render::waves::WaveRenderer::new(wave_canvas)?;
    let reveal_renderer = render::reveal::RevealRenderer::new(reveal_canvas, REVEAL_IMAGE_SRC)?;

    let content = content::build(&document, &mut scene.borrow_mut())?;
    let content = Rc::new(RefCell::new(content));
    content::wire_nav_toggle(&document);

    events::wire_pointer_handlers(&document, scene.clone());
    events::wire_resize(scene.clone(), content.clone());

    // Driver A: smoothing, proximity, reveal composite, cursor.
    let mut frame_ctx = frame::FrameContext {
        scene: scene.clone(),
        reveal: reveal_renderer,
        content: content.clone(),
    };
    let loop_a = frame::start_loop(move || frame_ctx.frame());

    // Driver B: wave field.
    let mut wave_ctx = frame::WaveContext {
        scene: scene.clone(),
        renderer: wave_renderer,
    };
    let loop_b = frame::start_loop(move || wave_ctx.frame());

    // Driver C: trail decay on its own fixed cadence.
    let scene_decay = scene.clone();
    let interval = frame::start_interval(TRAIL_DECAY_INTERVAL_MS, move || {
        scene_decay.borrow_mut().step_decay();
    })?;

    frame::wire_teardown(vec![loop_a, loop_b], interval);
    log::info!("[init] effect running");
    Ok(())
}
