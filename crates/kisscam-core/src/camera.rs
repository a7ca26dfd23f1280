//! Camera acquisition plan: ask for the rear camera at full HD, then settle
//! for any rear camera.

use crate::constants::{CAMERA_IDEAL_HEIGHT, CAMERA_IDEAL_WIDTH};
use crate::error::KissCamError;
use std::fmt::Debug;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Environment,
}

impl Facing {
    /// Value of the `facingMode` constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Environment => "environment",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraRequest {
    pub facing: Facing,
    /// Refuse other cameras instead of treating `facing` as a preference.
    pub exact_facing: bool,
    pub ideal_size: Option<(u32, u32)>,
}

impl CameraRequest {
    pub fn preferred() -> Self {
        Self {
            facing: Facing::Environment,
            exact_facing: true,
            ideal_size: Some((CAMERA_IDEAL_WIDTH, CAMERA_IDEAL_HEIGHT)),
        }
    }

    pub fn relaxed() -> Self {
        Self {
            facing: Facing::Environment,
            exact_facing: false,
            ideal_size: None,
        }
    }
}

pub fn acquisition_plan() -> [CameraRequest; 2] {
    [CameraRequest::preferred(), CameraRequest::relaxed()]
}

#[derive(Debug)]
pub struct Acquired<S> {
    pub stream: S,
    pub request: CameraRequest,
    pub attempt: usize,
}

/// Try each request in order and keep the first stream that opens.
pub async fn acquire_with_fallback<S, E, F, Fut>(
    plan: &[CameraRequest],
    mut open: F,
) -> Result<Acquired<S>, KissCamError>
where
    E: Debug,
    F: FnMut(CameraRequest) -> Fut,
    Fut: Future<Output = Result<S, E>>,
{
    let mut reasons = Vec::with_capacity(plan.len());
    for (attempt, request) in plan.iter().copied().enumerate() {
        match open(request).await {
            Ok(stream) => {
                log::info!("[camera] opened on attempt {} ({:?})", attempt + 1, request);
                return Ok(Acquired {
                    stream,
                    request,
                    attempt,
                });
            }
            Err(e) => {
                log::warn!("[camera] attempt {} failed: {:?}", attempt + 1, e);
                reasons.push(format!("{:?}", e));
            }
        }
    }
    Err(KissCamError::CameraUnavailable { reasons })
}
