//! Frame geometry: how a rotated camera image is laid onto the canvas.
//!
//! Everything here is a pure function of its inputs. The zoom scale is
//! consumed as given; clamping it is the caller's job.

use crate::error::KissCamError;
use glam::{Affine2, Vec2};
use std::fmt;
use std::str::FromStr;

/// Fixed rotation applied to the camera image before it is fitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    Identity,
    Clockwise,
    /// Camera mounted on its side with the top toward the floor.
    #[default]
    CounterClockwise,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Identity => 0,
            Rotation::Clockwise => 90,
            Rotation::CounterClockwise => -90,
        }
    }

    pub fn radians(self) -> f32 {
        (self.degrees() as f32).to_radians()
    }

    /// Whether width and height trade places once the image is rotated.
    pub fn is_quarter_turn(self) -> bool {
        !matches!(self, Rotation::Identity)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = KissCamError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Identity),
            90 => Ok(Rotation::Clockwise),
            270 => Ok(Rotation::CounterClockwise),
            _ => Err(KissCamError::InvalidRotation(degrees.to_string())),
        }
    }
}

impl FromStr for Rotation {
    type Err = KissCamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s
            .trim()
            .parse::<i32>()
            .map_err(|_| KissCamError::InvalidRotation(s.to_string()))?;
        Rotation::try_from(degrees)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// How the image is fitted to the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Fill the surface and crop the overflow.
    #[default]
    Cover,
    /// Show the whole image and letterbox the rest.
    Contain,
}

impl FromStr for FitMode {
    type Err = KissCamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(FitMode::Cover),
            "contain" => Ok(FitMode::Contain),
            other => Err(KissCamError::InvalidFitMode(other.to_string())),
        }
    }
}

/// The fullscreen drawing target in CSS pixels plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
    dpr: f32,
}

impl Surface {
    /// A non-finite or non-positive `dpr` falls back to 1.
    pub fn new(width: f32, height: f32, dpr: f32) -> Result<Self, KissCamError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(KissCamError::InvalidSurface { width, height });
        }
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Ok(Self { width, height, dpr })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    pub fn backing_width(&self) -> u32 {
        (self.width * self.dpr).round() as u32
    }

    pub fn backing_height(&self) -> u32 {
        (self.height * self.dpr).round() as u32
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Natural size of the current camera frame. Zero means "not ready yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaFrame {
    pub width: u32,
    pub height: u32,
}

impl MediaFrame {
    pub const NOT_READY: MediaFrame = MediaFrame {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Media size as it appears on screen after rotation.
pub fn effective_media_size(media: MediaFrame, rotation: Rotation) -> Vec2 {
    let (w, h) = (media.width as f32, media.height as f32);
    if rotation.is_quarter_turn() {
        Vec2::new(h, w)
    } else {
        Vec2::new(w, h)
    }
}

/// Where and how big to draw the camera image for one frame.
///
/// `draw_width`/`draw_height` are the fitted size in screen space before zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub draw_width: f32,
    pub draw_height: f32,
    pub origin: Vec2,
    pub rotation: Rotation,
    pub scale: f32,
}

impl DrawRect {
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.radians()
    }

    /// Size to hand to the draw call, in the image's own (unrotated) axes.
    pub fn image_size(&self) -> Vec2 {
        if self.rotation.is_quarter_turn() {
            Vec2::new(self.draw_height, self.draw_width)
        } else {
            Vec2::new(self.draw_width, self.draw_height)
        }
    }

    /// Destination rectangle `[x, y, w, h]` centered on the local origin.
    pub fn image_dest(&self) -> [f32; 4] {
        let size = self.image_size();
        [-size.x * 0.5, -size.y * 0.5, size.x, size.y]
    }

    /// Screen-space extent once zoom is applied.
    pub fn visible_size(&self) -> Vec2 {
        Vec2::new(self.draw_width, self.draw_height) * self.scale
    }

    /// Translate to the origin, rotate, then scale. Maps image-local CSS
    /// pixels to surface CSS pixels.
    pub fn transform(&self) -> Affine2 {
        Affine2::from_translation(self.origin)
            * Affine2::from_angle(self.rotation_radians())
            * Affine2::from_scale(Vec2::splat(self.scale))
    }
}

/// Fit `media` onto `surface` and place it at the surface center.
///
/// Returns `None` while the media or surface has no area; the frame is simply
/// skipped.
pub fn compute_draw_rect(
    media: MediaFrame,
    surface: &Surface,
    rotation: Rotation,
    fit: FitMode,
    scale: f32,
) -> Option<DrawRect> {
    if !media.is_ready() || surface.is_empty() {
        return None;
    }
    let effective = effective_media_size(media, rotation);
    let video_aspect = effective.x / effective.y;
    let canvas_aspect = surface.width() / surface.height();

    let height_fixed = match fit {
        FitMode::Cover => video_aspect > canvas_aspect,
        FitMode::Contain => video_aspect <= canvas_aspect,
    };
    let (draw_width, draw_height) = if height_fixed {
        (surface.height() * video_aspect, surface.height())
    } else {
        (surface.width(), surface.width() / video_aspect)
    };

    Some(DrawRect {
        draw_width,
        draw_height,
        origin: surface.center(),
        rotation,
        scale,
    })
}
