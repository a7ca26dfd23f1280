use crate::frame::SessionClock;
use glam::Vec2;
use kisscam_core::{KissCam, PointerInput, SessionEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub session: Rc<RefCell<KissCam>>,
    pub clock: SessionClock,
}

/// Pinch input is read from the whole document so buttons and the particle
/// layer on top of the canvas do not swallow contacts.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointer(&w, "pointerdown", |id, position| PointerInput::Down { id, position });
    wire_pointer(&w, "pointermove", |id, position| PointerInput::Move { id, position });
    wire_pointer(&w, "pointerup", |id, _| PointerInput::Up { id });
    wire_pointer(&w, "pointercancel", |id, _| PointerInput::Cancel { id });
}

#[inline]
fn client_position(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointer(w: &InputWiring, event: &str, to_input: fn(i32, Vec2) -> PointerInput) {
    let session = w.session.clone();
    let clock = w.clock;

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let input = to_input(ev.pointer_id(), client_position(&ev));
        session
            .borrow_mut()
            .push(clock.now(), SessionEvent::Pointer(input));
    }) as Box<dyn FnMut(_)>);

    _ = w
        .document
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
