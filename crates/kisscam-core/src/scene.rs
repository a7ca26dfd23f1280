//! The two-state display: searching for a couple, or celebrating one.

use crate::constants::{KISSING_MESSAGE, SEARCHING_MESSAGE};
use crate::geometry::Surface;
use crate::particles::{Burst, ParticleId, ParticleSink};
use crate::timers::{TimerQueue, TimerToken};
use crate::zoom::ZoomState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scene {
    #[default]
    Searching,
    Kissing,
}

impl Scene {
    pub fn message(self) -> &'static str {
        match self {
            Scene::Searching => SEARCHING_MESSAGE,
            Scene::Kissing => KISSING_MESSAGE,
        }
    }

    /// Kissing copy is shown in the large style.
    pub fn emphasized(self) -> bool {
        matches!(self, Scene::Kissing)
    }
}

/// Delayed work owned by the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTask {
    EndPulse,
    ExpireParticle(ParticleId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTuning {
    pub burst_count: usize,
    pub pulse_factor: f32,
    pub pulse_duration: Duration,
}

pub struct SceneController {
    scene: Scene,
    tuning: SceneTuning,
    rng: StdRng,
    next_particle_id: u64,
    pulse_token: Option<TimerToken>,
}

impl SceneController {
    pub fn new(tuning: SceneTuning, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            scene: Scene::Searching,
            tuning,
            rng,
            next_particle_id: 0,
            pulse_token: None,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn set_searching(
        &mut self,
        sink: &mut dyn ParticleSink,
        timers: &mut TimerQueue<SceneTask>,
    ) {
        self.clear_particles(sink, timers);
        self.scene = Scene::Searching;
        sink.show_scene(self.scene);
        log::info!("[scene] searching");
    }

    /// Clear the stage, burst hearts at the surface center and pulse the zoom.
    pub fn set_kissing(
        &mut self,
        surface: &Surface,
        zoom: &mut ZoomState,
        sink: &mut dyn ParticleSink,
        timers: &mut TimerQueue<SceneTask>,
        now: Duration,
    ) {
        self.clear_particles(sink, timers);
        self.scene = Scene::Kissing;
        sink.show_scene(self.scene);

        let burst = Burst {
            center: surface.center(),
            count: self.tuning.burst_count,
            big: true,
        };
        let particles = burst.scatter(&mut self.rng, self.next_particle_id);
        self.next_particle_id += particles.len() as u64;
        sink.spawn_burst(&burst, &particles);
        for p in &particles {
            timers.schedule(now + p.lifetime, SceneTask::ExpireParticle(p.id));
        }

        if let Some(stale) = self.pulse_token.take() {
            timers.cancel(stale);
        }
        let base = zoom.begin_pulse(self.tuning.pulse_factor);
        let revert_at = now + self.tuning.pulse_duration;
        self.pulse_token = Some(timers.schedule(revert_at, SceneTask::EndPulse));
        log::info!(
            "[scene] kiss: {} hearts, pulse {:.2} -> {:.2}",
            particles.len(),
            base,
            zoom.current_scale()
        );
    }

    pub fn run_task(
        &mut self,
        task: SceneTask,
        zoom: &mut ZoomState,
        sink: &mut dyn ParticleSink,
    ) {
        match task {
            SceneTask::EndPulse => {
                self.pulse_token = None;
                if zoom.end_pulse() {
                    log::debug!("[scene] pulse reverted to {:.2}", zoom.current_scale());
                } else {
                    log::debug!("[scene] pulse superseded by user zoom");
                }
            }
            SceneTask::ExpireParticle(id) => sink.expire(id),
        }
    }

    fn clear_particles(
        &mut self,
        sink: &mut dyn ParticleSink,
        timers: &mut TimerQueue<SceneTask>,
    ) {
        let dropped = timers.cancel_where(|t| matches!(t, SceneTask::ExpireParticle(_)));
        sink.clear_all();
        if dropped > 0 {
            log::debug!("[scene] cleared {} live hearts", dropped);
        }
    }
}
