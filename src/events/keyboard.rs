use crate::frame::SessionClock;
use crate::keymap::{shortcut_for_key, Shortcut};
use kisscam_core::{KissCam, SessionEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<KissCam>>,
    clock: SessionClock,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(shortcut) = shortcut_for_key(&key) else {
        return;
    };
    let event = match shortcut {
        Shortcut::Kiss => SessionEvent::SetKissing,
        Shortcut::Search => SessionEvent::SetSearching,
        Shortcut::ResetZoom => SessionEvent::ResetZoom,
    };
    log::info!("[key] {} -> {:?}", key, shortcut);
    session.borrow_mut().push(clock.now(), event);
    ev.prevent_default();
}

pub fn wire_global_keydown(session: Rc<RefCell<KissCam>>, clock: SessionClock) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session, clock);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
