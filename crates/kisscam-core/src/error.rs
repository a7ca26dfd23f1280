use thiserror::Error;

/// Errors raised by the kiss cam core.
///
/// Degenerate geometry (a camera that has not reported its size yet, two
/// fingers on the same spot) is never an error; those paths skip work instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KissCamError {
    #[error("unsupported rotation {0:?}, expected one of -90, 0, 90")]
    InvalidRotation(String),
    #[error("unknown fit mode {0:?}, expected \"cover\" or \"contain\"")]
    InvalidFitMode(String),
    #[error("invalid surface {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error("camera unavailable after {} attempt(s): {}", reasons.len(), reasons.join("; "))]
    CameraUnavailable { reasons: Vec<String> },
}
