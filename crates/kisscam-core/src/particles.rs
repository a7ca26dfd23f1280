use crate::constants::*;
use crate::scene::Scene;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

/// One heart in a burst, fully laid out. The sink only animates it.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartParticle {
    pub id: ParticleId,
    /// Start position in CSS pixels.
    pub position: Vec2,
    pub size: f32,
    /// Offset travelled over the animation.
    pub flight: Vec2,
    pub end_scale: f32,
    pub spin_degrees: f32,
    pub lifetime: Duration,
}

/// Request for `count` hearts scattered around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub center: Vec2,
    pub count: usize,
    pub big: bool,
}

impl Burst {
    /// Lay out the hearts. Ids are assigned from `first_id` upward.
    pub fn scatter<R: Rng>(&self, rng: &mut R, first_id: u64) -> Vec<HeartParticle> {
        let (size_min, size_max) = if self.big {
            HEART_SIZE_LARGE_PX
        } else {
            HEART_SIZE_SMALL_PX
        };
        (0..self.count as u64)
            .map(|i| {
                let offset = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
                    * BURST_SPREAD_PX;
                let flight = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * HEART_DRIFT_X_PX,
                    -HEART_RISE_MIN_PX - rng.gen::<f32>() * HEART_RISE_SPAN_PX,
                );
                HeartParticle {
                    id: ParticleId(first_id + i),
                    position: self.center + offset,
                    size: rng.gen_range(size_min..size_max),
                    flight,
                    end_scale: rng.gen_range(HEART_END_SCALE.0..HEART_END_SCALE.1),
                    spin_degrees: rng.gen_range(0.0..360.0),
                    lifetime: HEART_LIFETIME_MIN + HEART_LIFETIME_JITTER.mul_f32(rng.gen()),
                }
            })
            .collect()
    }
}

/// Where hearts and scene copy end up. Implemented by the DOM layer.
pub trait ParticleSink {
    fn spawn_burst(&mut self, burst: &Burst, particles: &[HeartParticle]);

    /// Remove one heart whose lifetime ran out.
    fn expire(&mut self, id: ParticleId);

    /// Remove every heart immediately.
    fn clear_all(&mut self);

    fn show_scene(&mut self, _scene: Scene) {}
}
