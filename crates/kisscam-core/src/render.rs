use crate::geometry::{compute_draw_rect, DrawRect, FitMode, MediaFrame, Rotation, Surface};
use crate::zoom::ZoomState;
use glam::{Affine2, Vec2};

/// Everything the draw call needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub rect: DrawRect,
    /// Image-local CSS pixels to backing-store pixels (DPR included).
    pub transform: Affine2,
    /// `[x, y, w, h]` in image-local CSS pixels.
    pub image_dest: [f32; 4],
}

impl FramePlan {
    pub fn new(rect: DrawRect, surface: &Surface) -> Self {
        Self {
            rect,
            transform: Affine2::from_scale(Vec2::splat(surface.dpr())) * rect.transform(),
            image_dest: rect.image_dest(),
        }
    }
}

/// Backend that puts pixels on the screen (a 2D canvas on the web).
pub trait DrawTarget {
    fn clear(&mut self, surface: &Surface);
    fn draw_frame(&mut self, plan: &FramePlan);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Drawn,
    WaitingForMedia,
    /// The viewport has no area (hidden tab, collapsed layout).
    NoSurface,
}

/// Per-frame driver. Holds the surface between resize events so ticks never
/// query layout.
#[derive(Debug)]
pub struct RenderLoop {
    surface: Surface,
    rotation: Rotation,
    fit: FitMode,
    frames_drawn: u64,
    frames_waiting: u64,
    frames_without_surface: u64,
}

impl RenderLoop {
    pub fn new(surface: Surface, rotation: Rotation, fit: FitMode) -> Self {
        Self {
            surface,
            rotation,
            fit,
            frames_drawn: 0,
            frames_waiting: 0,
            frames_without_surface: 0,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn fit(&self) -> FitMode {
        self.fit
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn frames_waiting(&self) -> u64 {
        self.frames_waiting
    }

    pub fn frames_without_surface(&self) -> u64 {
        self.frames_without_surface
    }

    pub fn resize(&mut self, surface: Surface) {
        if surface != self.surface {
            log::info!(
                "[surface] {}x{} css @ {}x -> {}x{} px",
                surface.width(),
                surface.height(),
                surface.dpr(),
                surface.backing_width(),
                surface.backing_height()
            );
        }
        self.surface = surface;
    }

    pub fn plan(&self, media: MediaFrame, zoom: &ZoomState) -> Option<FramePlan> {
        compute_draw_rect(
            media,
            &self.surface,
            self.rotation,
            self.fit,
            zoom.current_scale(),
        )
        .map(|rect| FramePlan::new(rect, &self.surface))
    }

    pub fn tick(
        &mut self,
        media: MediaFrame,
        zoom: &ZoomState,
        target: &mut dyn DrawTarget,
    ) -> TickOutcome {
        if self.surface.is_empty() {
            if self.frames_without_surface == 0 {
                log::info!("[render] surface has no area, skipping frames");
            }
            self.frames_without_surface += 1;
            return TickOutcome::NoSurface;
        }
        let Some(plan) = self.plan(media, zoom) else {
            if self.frames_waiting == 0 {
                log::info!("[render] waiting for camera");
            }
            self.frames_waiting += 1;
            return TickOutcome::WaitingForMedia;
        };
        if self.frames_drawn == 0 {
            log::info!(
                "[render] first frame {}x{} rotated {}",
                media.width,
                media.height,
                self.rotation
            );
        }
        target.clear(&self.surface);
        target.draw_frame(&plan);
        self.frames_drawn += 1;
        log::trace!("[render] frame {} scale {:.2}", self.frames_drawn, plan.rect.scale);
        TickOutcome::Drawn
    }
}
