//! Pinch-to-zoom and double-tap reset over raw pointer input.
//!
//! The tracker keeps the set of pressed pointers and drives [`ZoomState`].
//! Only a gesture with exactly two contacts changes the scale; single-pointer
//! drags are ignored apart from their release, which counts as a tap.

use crate::constants::{DOUBLE_TAP_WINDOW, MIN_PINCH_DISTANCE};
use crate::zoom::{clamp_scale, ZoomState};
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

pub type PointerId = i32;

/// One pointer event in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down { id: PointerId, position: Vec2 },
    Move { id: PointerId, position: Vec2 },
    Up { id: PointerId },
    Cancel { id: PointerId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Tracking,
}

/// What a single pointer event did to the zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    Ignored,
    Started { start_distance: f32 },
    Scaled(f32),
    /// Two pointers are down but their distance cannot anchor a ratio yet.
    Unresolved,
    Ended,
    DoubleTapReset,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    pointers: FnvHashMap<PointerId, Vec2>,
    last_tap: Option<Duration>,
    double_tap_window: Duration,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW)
    }
}

impl GestureTracker {
    pub fn new(double_tap_window: Duration) -> Self {
        Self {
            pointers: FnvHashMap::default(),
            last_tap: None,
            double_tap_window,
        }
    }

    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    pub fn phase(&self, zoom: &ZoomState) -> GesturePhase {
        if self.pointers.len() == 2 && zoom.start_distance().is_some() {
            GesturePhase::Tracking
        } else {
            GesturePhase::Idle
        }
    }

    /// Feed one pointer event observed at `now` (monotonic session time).
    pub fn handle(
        &mut self,
        zoom: &mut ZoomState,
        input: PointerInput,
        now: Duration,
    ) -> GestureUpdate {
        match input {
            PointerInput::Down { id, position } => {
                self.pointers.insert(id, position);
                self.sync_anchor(zoom)
            }
            PointerInput::Move { id, position } => match self.pointers.get_mut(&id) {
                Some(slot) => {
                    *slot = position;
                    self.update_scale(zoom)
                }
                None => GestureUpdate::Ignored,
            },
            PointerInput::Up { id } => {
                let single = self.pointers.len() == 1;
                if self.pointers.remove(&id).is_none() {
                    return GestureUpdate::Ignored;
                }
                let update = self.sync_anchor(zoom);
                if single && self.register_tap(now) {
                    zoom.reset();
                    log::info!("[gesture] double tap, zoom reset");
                    return GestureUpdate::DoubleTapReset;
                }
                update
            }
            PointerInput::Cancel { id } => {
                if self.pointers.remove(&id).is_none() {
                    return GestureUpdate::Ignored;
                }
                self.sync_anchor(zoom)
            }
        }
    }

    // Anchor when exactly two contacts remain, release otherwise.
    fn sync_anchor(&mut self, zoom: &mut ZoomState) -> GestureUpdate {
        if let Some(distance) = self.pair_distance() {
            zoom.anchor_gesture(distance);
            log::debug!(
                "[gesture] pinch anchored at {:.1}px, scale {:.2}",
                distance,
                zoom.last_scale()
            );
            return GestureUpdate::Started {
                start_distance: distance,
            };
        }
        if zoom.start_distance().is_some() {
            zoom.release_gesture();
            log::debug!("[gesture] pinch ended at scale {:.2}", zoom.current_scale());
            return GestureUpdate::Ended;
        }
        GestureUpdate::Ignored
    }

    fn update_scale(&mut self, zoom: &mut ZoomState) -> GestureUpdate {
        let (Some(distance), Some(start)) = (self.pair_distance(), zoom.start_distance()) else {
            return GestureUpdate::Ignored;
        };
        if start <= MIN_PINCH_DISTANCE {
            if distance > MIN_PINCH_DISTANCE {
                zoom.reanchor_distance(distance);
            }
            return GestureUpdate::Unresolved;
        }
        let scale = clamp_scale(zoom.last_scale() * (distance / start));
        zoom.apply_gesture_scale(scale);
        GestureUpdate::Scaled(scale)
    }

    fn pair_distance(&self) -> Option<f32> {
        if self.pointers.len() != 2 {
            return None;
        }
        let pts: SmallVec<[Vec2; 2]> = self.pointers.values().copied().collect();
        Some(pts[0].distance(pts[1]))
    }

    // True when this tap completes a double tap; the pair is then consumed.
    fn register_tap(&mut self, now: Duration) -> bool {
        match self.last_tap {
            Some(prev) if now.saturating_sub(prev) < self.double_tap_window => {
                self.last_tap = None;
                true
            }
            _ => {
                self.last_tap = Some(now);
                false
            }
        }
    }
}
