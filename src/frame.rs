use crate::camera;
use crate::particles::DomParticles;
use crate::render::CanvasTarget;
use instant::Instant;
use kisscam_core::{KissCam, TickOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic session time shared by input callbacks and the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    epoch: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

pub struct FrameContext {
    pub session: Rc<RefCell<KissCam>>,
    pub clock: SessionClock,
    pub video: web::HtmlVideoElement,
    pub target: CanvasTarget,
    pub particles: DomParticles,
    pub last_outcome: Option<TickOutcome>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let media = camera::current_frame(&self.video);
        let outcome = self.session.borrow_mut().tick(
            now,
            media,
            &mut self.particles,
            &mut self.target,
        );
        if self.last_outcome != Some(outcome) {
            log::debug!("[frame] {:?} at {:.2}s", outcome, now.as_secs_f32());
            self.last_outcome = Some(outcome);
        }
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame forever.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
