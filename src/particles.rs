use crate::constants::{BIG_TEXT_CLASS, HEART_CLASS, HEART_SVG, HEART_TRANSITION};
use crate::css;
use fnv::FnvHashMap;
use kisscam_core::{Burst, HeartParticle, ParticleId, ParticleSink, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hearts as absolutely positioned elements inside the particle layer, plus
/// the scene message.
pub struct DomParticles {
    document: web::Document,
    layer: web::HtmlElement,
    message: Option<web::HtmlElement>,
    live: FnvHashMap<ParticleId, web::HtmlElement>,
}

impl DomParticles {
    pub fn new(
        document: web::Document,
        layer: web::HtmlElement,
        message: Option<web::HtmlElement>,
    ) -> Self {
        Self {
            document,
            layer,
            message,
            live: FnvHashMap::default(),
        }
    }

    fn create_heart(&self, p: &HeartParticle) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(HEART_CLASS);
        el.set_inner_html(HEART_SVG);
        let style = el.style();
        _ = style.set_property("width", &css::px(p.size));
        _ = style.set_property("height", &css::px(p.size));
        _ = style.set_property("left", &css::px(p.position.x));
        _ = style.set_property("top", &css::px(p.position.y));
        self.layer.append_child(&el).ok()?;
        Some(el)
    }
}

// Start the flight on the next frame so the transition sees the initial style.
fn launch(el: &web::HtmlElement, p: &HeartParticle) {
    let el = el.clone();
    let transform =
        css::heart_flight_transform(p.flight.x, p.flight.y, p.end_scale, p.spin_degrees);
    let cb = Closure::once_into_js(move || {
        let style = el.style();
        _ = style.set_property("transition", HEART_TRANSITION);
        _ = style.set_property("transform", &transform);
        _ = style.set_property("opacity", "1");
    });
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

impl ParticleSink for DomParticles {
    fn spawn_burst(&mut self, burst: &Burst, particles: &[HeartParticle]) {
        for p in particles {
            match self.create_heart(p) {
                Some(el) => {
                    launch(&el, p);
                    self.live.insert(p.id, el);
                }
                None => log::warn!("[particles] could not create heart {:?}", p.id),
            }
        }
        log::debug!(
            "[particles] burst of {} at ({:.0},{:.0}), {} live",
            burst.count,
            burst.center.x,
            burst.center.y,
            self.live.len()
        );
    }

    fn expire(&mut self, id: ParticleId) {
        if let Some(el) = self.live.remove(&id) {
            el.remove();
        }
    }

    fn clear_all(&mut self) {
        self.live.clear();
        self.layer.set_inner_html("");
    }

    fn show_scene(&mut self, scene: Scene) {
        let Some(message) = &self.message else {
            return;
        };
        message.set_text_content(Some(scene.message()));
        let classes = message.class_list();
        if scene.emphasized() {
            _ = classes.add_1(BIG_TEXT_CLASS);
        } else {
            _ = classes.remove_1(BIG_TEXT_CLASS);
        }
    }
}
