use std::cell::RefCell;
use std::rc::Rc;

use site_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::content::ContentElements;
use crate::{dom, input};

/// Wire pointermove (window-level, so motion over content still tracks)
/// and pointerleave (document root, so leaving the viewport parks the
/// pointer off-canvas).
pub fn wire_pointer_handlers(document: &web::Document, scene: Rc<RefCell<SceneState>>) {
    // pointermove
    {
        let scene_m = scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_client_px(&ev);
            scene_m.borrow_mut().pointer_move(pos);
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerleave
    if let Some(root) = document.document_element() {
        let scene_l = scene.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            scene_l.borrow_mut().pointer_leave();
        }) as Box<dyn FnMut(_)>);
        let _ =
            root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the simulation viewport and the registered proximity rects in
/// step with the window. Canvas backings resync inside the render
/// paths, so a resize here is just state bookkeeping.
pub fn wire_resize(scene: Rc<RefCell<SceneState>>, content: Rc<RefCell<ContentElements>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::viewport_size();
        let mut scene_mut = scene.borrow_mut();
        scene_mut.set_viewport(viewport);
        content.borrow().refresh_bounds(&mut scene_mut);
        log::debug!("[resize] viewport {}x{}", viewport.x, viewport.y);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
