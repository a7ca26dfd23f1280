use crate::constants::{MAX_SCALE, MIN_SCALE};

#[inline]
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Committed zoom plus the anchor of the pinch in progress, if any.
///
/// Written by the gesture tracker and the kiss pulse; read by the renderer
/// every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomState {
    current_scale: f32,
    last_scale: f32,
    start_distance: Option<f32>,
    // scale to restore when the running pulse ends
    pulse_base: Option<f32>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            current_scale: MIN_SCALE,
            last_scale: MIN_SCALE,
            start_distance: None,
            pulse_base: None,
        }
    }
}

impl ZoomState {
    pub fn current_scale(&self) -> f32 {
        self.current_scale
    }

    pub fn last_scale(&self) -> f32 {
        self.last_scale
    }

    pub fn start_distance(&self) -> Option<f32> {
        self.start_distance
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_base.is_some()
    }

    pub(crate) fn anchor_gesture(&mut self, distance: f32) {
        self.start_distance = Some(distance);
        self.last_scale = self.current_scale;
    }

    /// Replace the anchor distance without touching the snapshot scale.
    pub(crate) fn reanchor_distance(&mut self, distance: f32) {
        self.start_distance = Some(distance);
    }

    pub(crate) fn release_gesture(&mut self) {
        self.start_distance = None;
    }

    /// A pinch update always wins over a running pulse.
    pub(crate) fn apply_gesture_scale(&mut self, scale: f32) {
        self.current_scale = clamp_scale(scale);
        self.pulse_base = None;
    }

    pub fn reset(&mut self) {
        self.current_scale = MIN_SCALE;
        self.last_scale = MIN_SCALE;
        self.pulse_base = None;
        if self.start_distance.is_some() {
            log::debug!("[zoom] reset during pinch; gesture re-based at 1.0");
        }
    }

    /// Magnify by `factor` on top of the pre-pulse scale. Re-pulsing while a
    /// pulse is running does not compound.
    pub fn begin_pulse(&mut self, factor: f32) -> f32 {
        let base = *self.pulse_base.get_or_insert(self.current_scale);
        self.current_scale = clamp_scale(base * factor);
        base
    }

    /// Restore the pre-pulse scale. Returns false when a gesture or reset has
    /// already taken over.
    pub fn end_pulse(&mut self) -> bool {
        match self.pulse_base.take() {
            Some(base) => {
                self.current_scale = base;
                if self.start_distance.is_some() {
                    self.last_scale = base;
                }
                true
            }
            None => false,
        }
    }
}
