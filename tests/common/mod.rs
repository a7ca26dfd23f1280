// Recording fakes for the particle sink and draw target.

#![allow(dead_code)]
use kisscam_core::{
    Burst, DrawTarget, FramePlan, HeartParticle, ParticleId, ParticleSink, PointerInput, Scene,
    Surface,
};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum SinkEvent {
    Burst { count: usize, big: bool, center: Vec2 },
    Expire(ParticleId),
    Clear,
    Scene(Scene),
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
    pub spawned: Vec<HeartParticle>,
}

impl RecordingSink {
    pub fn expired(&self) -> Vec<ParticleId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Expire(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl ParticleSink for RecordingSink {
    fn spawn_burst(&mut self, burst: &Burst, particles: &[HeartParticle]) {
        self.events.push(SinkEvent::Burst {
            count: particles.len(),
            big: burst.big,
            center: burst.center,
        });
        self.spawned.extend_from_slice(particles);
    }

    fn expire(&mut self, id: ParticleId) {
        self.events.push(SinkEvent::Expire(id));
    }

    fn clear_all(&mut self) {
        self.events.push(SinkEvent::Clear);
    }

    fn show_scene(&mut self, scene: Scene) {
        self.events.push(SinkEvent::Scene(scene));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear { width: u32, height: u32 },
    Frame(FramePlan),
}

#[derive(Default)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
}

impl DrawTarget for RecordingTarget {
    fn clear(&mut self, surface: &Surface) {
        self.calls.push(DrawCall::Clear {
            width: surface.backing_width(),
            height: surface.backing_height(),
        });
    }

    fn draw_frame(&mut self, plan: &FramePlan) {
        self.calls.push(DrawCall::Frame(*plan));
    }
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn down(id: i32, x: f32, y: f32) -> PointerInput {
    PointerInput::Down {
        id,
        position: Vec2::new(x, y),
    }
}

pub fn mv(id: i32, x: f32, y: f32) -> PointerInput {
    PointerInput::Move {
        id,
        position: Vec2::new(x, y),
    }
}

pub fn up(id: i32) -> PointerInput {
    PointerInput::Up { id }
}

pub fn surface(w: f32, h: f32) -> Surface {
    Surface::new(w, h, 1.0).unwrap()
}
