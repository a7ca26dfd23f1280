use kisscam_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

/// Current viewport in CSS pixels with the device pixel ratio.
pub fn viewport_surface(window: &web::Window) -> anyhow::Result<Surface> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Ok(Surface::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    )?)
}

/// Size the canvas to fill the viewport with a DPR-scaled backing store.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, surface: &Surface) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", surface.width()));
    _ = style.set_property("height", &format!("{}px", surface.height()));
    canvas.set_width(surface.backing_width().max(1));
    canvas.set_height(surface.backing_height().max(1));
}
