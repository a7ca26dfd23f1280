use kisscam_core::{DrawTarget, FramePlan, Surface};
use web_sys as web;

/// Draws the camera video into a 2D canvas context.
pub struct CanvasTarget {
    pub ctx: web::CanvasRenderingContext2d,
    pub video: web::HtmlVideoElement,
}

impl DrawTarget for CanvasTarget {
    fn clear(&mut self, surface: &Surface) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            surface.backing_width() as f64,
            surface.backing_height() as f64,
        );
    }

    fn draw_frame(&mut self, plan: &FramePlan) {
        let [a, b, c, d, e, f] = plan.transform.to_cols_array().map(f64::from);
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::warn!("[render] setTransform failed: {:?}", err);
            return;
        }
        let [x, y, w, h] = plan.image_dest.map(f64::from);
        if let Err(err) = self
            .ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, x, y, w, h)
        {
            log::debug!("[render] drawImage skipped: {:?}", err);
        }
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }
}
