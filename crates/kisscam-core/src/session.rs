//! One camera session: owns all mutable state and dispatches input in order.
//!
//! Input callbacks only [`push`](KissCam::push) events. The animation-frame
//! callback calls [`tick`](KissCam::tick), which drains the queue with due
//! timers interleaved by timestamp, fires the rest of the due timers and then
//! draws, so a pointer event always lands before the frame that follows it.

use crate::config::KissCamConfig;
use crate::geometry::{MediaFrame, Surface};
use crate::gesture::{GesturePhase, GestureTracker, GestureUpdate, PointerInput};
use crate::particles::ParticleSink;
use crate::render::{DrawTarget, RenderLoop, TickOutcome};
use crate::scene::{Scene, SceneController, SceneTask};
use crate::timers::TimerQueue;
use crate::zoom::ZoomState;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionEvent {
    Pointer(PointerInput),
    Resize(Surface),
    SetSearching,
    SetKissing,
    ResetZoom,
}

pub struct KissCam {
    zoom: ZoomState,
    gestures: GestureTracker,
    render: RenderLoop,
    scene: SceneController,
    timers: TimerQueue<SceneTask>,
    queue: VecDeque<(Duration, SessionEvent)>,
}

impl KissCam {
    pub fn new(config: &KissCamConfig, surface: Surface) -> Self {
        log::info!(
            "[session] rotation {} fit {:?} surface {}x{}",
            config.rotation,
            config.fit,
            surface.width(),
            surface.height()
        );
        Self {
            zoom: ZoomState::default(),
            gestures: GestureTracker::new(config.double_tap_window),
            render: RenderLoop::new(surface, config.rotation, config.fit),
            scene: SceneController::new(config.scene_tuning(), config.rng_seed),
            timers: TimerQueue::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn scene(&self) -> Scene {
        self.scene.scene()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gestures.phase(&self.zoom)
    }

    pub fn surface(&self) -> &Surface {
        self.render.surface()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Queue an event observed at session time `at`.
    pub fn push(&mut self, at: Duration, event: SessionEvent) {
        self.queue.push_back((at, event));
    }

    /// Apply all queued events in arrival order. Returns how many ran.
    ///
    /// Timers due at or before an event's timestamp fire before that event,
    /// so a frame that batches both sees them in session-time order.
    pub fn dispatch(&mut self, sink: &mut dyn ParticleSink) -> usize {
        let mut handled = 0;
        while let Some((at, event)) = self.queue.pop_front() {
            self.run_timers(at, sink);
            self.apply(at, event, sink);
            handled += 1;
        }
        handled
    }

    /// Run every timer due at or before `now`. Returns how many ran.
    pub fn run_timers(&mut self, now: Duration, sink: &mut dyn ParticleSink) -> usize {
        let mut fired = 0;
        while let Some(task) = self.timers.pop_due(now) {
            self.scene.run_task(task, &mut self.zoom, sink);
            fired += 1;
        }
        fired
    }

    pub fn tick(
        &mut self,
        now: Duration,
        media: MediaFrame,
        sink: &mut dyn ParticleSink,
        target: &mut dyn DrawTarget,
    ) -> TickOutcome {
        self.dispatch(sink);
        self.run_timers(now, sink);
        self.render.tick(media, &self.zoom, target)
    }

    fn apply(&mut self, at: Duration, event: SessionEvent, sink: &mut dyn ParticleSink) {
        match event {
            SessionEvent::Pointer(input) => {
                let update = self.gestures.handle(&mut self.zoom, input, at);
                if let GestureUpdate::Scaled(scale) = update {
                    log::trace!("[gesture] scale {:.3}", scale);
                }
            }
            SessionEvent::Resize(surface) => self.render.resize(surface),
            SessionEvent::SetSearching => self.scene.set_searching(sink, &mut self.timers),
            SessionEvent::SetKissing => {
                let surface = *self.render.surface();
                self.scene
                    .set_kissing(&surface, &mut self.zoom, sink, &mut self.timers, at);
            }
            SessionEvent::ResetZoom => {
                self.zoom.reset();
                log::info!("[session] zoom reset");
            }
        }
    }
}
