use crate::constants::VIDEO_READY_STATE;
use js_sys::{Object, Reflect};
use kisscam_core::{acquire_with_fallback, acquisition_plan, CameraRequest, MediaFrame};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `{ facingMode, width: { ideal }, height: { ideal } }` for getUserMedia.
fn video_constraints(request: &CameraRequest) -> Result<JsValue, JsValue> {
    let video = Object::new();
    let facing: JsValue = if request.exact_facing {
        let exact = Object::new();
        Reflect::set(&exact, &"exact".into(), &request.facing.as_str().into())?;
        exact.into()
    } else {
        request.facing.as_str().into()
    };
    Reflect::set(&video, &"facingMode".into(), &facing)?;
    if let Some((w, h)) = request.ideal_size {
        for (key, value) in [("width", w), ("height", h)] {
            let ideal = Object::new();
            Reflect::set(&ideal, &"ideal".into(), &JsValue::from(value))?;
            Reflect::set(&video, &key.into(), &ideal)?;
        }
    }
    Ok(video.into())
}

async fn open_stream(request: CameraRequest) -> Result<web::MediaStream, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_constraints(&request)?);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    stream.dyn_into::<web::MediaStream>()
}

/// Open the rear camera, falling back to relaxed constraints, and start
/// playback on `video`.
pub async fn start(video: &web::HtmlVideoElement) -> anyhow::Result<()> {
    let acquired = acquire_with_fallback(&acquisition_plan(), open_stream).await?;
    video.set_src_object(Some(&acquired.stream));
    let playing = video
        .play()
        .map_err(|e| anyhow::anyhow!("video.play() failed: {:?}", e))?;
    JsFuture::from(playing)
        .await
        .map_err(|e| anyhow::anyhow!("video playback rejected: {:?}", e))?;
    log::info!(
        "[camera] playing {}x{}",
        video.video_width(),
        video.video_height()
    );
    Ok(())
}

/// Current frame size, or not-ready until the element has a decodable frame.
#[inline]
pub fn current_frame(video: &web::HtmlVideoElement) -> MediaFrame {
    if video.ready_state() < VIDEO_READY_STATE {
        return MediaFrame::NOT_READY;
    }
    MediaFrame::new(video.video_width(), video.video_height())
}
