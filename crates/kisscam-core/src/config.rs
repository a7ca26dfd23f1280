use crate::constants::*;
use crate::geometry::{FitMode, Rotation};
use crate::scene::SceneTuning;
use std::time::Duration;

/// Session settings. Everything is fixed once the session starts.
#[derive(Clone, Debug, PartialEq)]
pub struct KissCamConfig {
    pub rotation: Rotation,
    pub fit: FitMode,
    pub double_tap_window: Duration,
    pub pulse_factor: f32,
    pub pulse_duration: Duration,
    pub burst_count: usize,
    /// Fixed seed for particle layout; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for KissCamConfig {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            fit: FitMode::default(),
            double_tap_window: DOUBLE_TAP_WINDOW,
            pulse_factor: PULSE_FACTOR,
            pulse_duration: PULSE_DURATION,
            burst_count: KISS_BURST_COUNT,
            rng_seed: None,
        }
    }
}

impl KissCamConfig {
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn scene_tuning(&self) -> SceneTuning {
        SceneTuning {
            burst_count: self.burst_count,
            pulse_factor: self.pulse_factor,
            pulse_duration: self.pulse_duration,
        }
    }
}
