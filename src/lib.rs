#![cfg(target_arch = "wasm32")]
use kisscam_core::{FitMode, KissCam, KissCamConfig, Rotation, SessionEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod keymap;
mod particles;
mod render;

use constants::*;
use frame::SessionClock;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    session: &Rc<RefCell<KissCam>>,
    clock: SessionClock,
) {
    let canvas_resize = canvas.clone();
    let session = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        match dom::viewport_surface(&window) {
            Ok(surface) => {
                dom::sync_canvas_backing_size(&canvas_resize, &surface);
                session
                    .borrow_mut()
                    .push(clock.now(), SessionEvent::Resize(surface));
            }
            Err(e) => log::warn!("[surface] ignoring resize: {}", e),
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        for event in ["resize", "orientationchange"] {
            _ = window
                .add_event_listener_with_callback(event, resize_closure.as_ref().unchecked_ref());
        }
    }
    resize_closure.forget();
}

fn wire_scene_buttons(
    document: &web::Document,
    session: &Rc<RefCell<KissCam>>,
    clock: SessionClock,
) {
    let search = session.clone();
    dom::add_click_listener(document, SEARCH_BUTTON_ID, move || {
        search
            .borrow_mut()
            .push(clock.now(), SessionEvent::SetSearching);
    });

    let kiss = session.clone();
    dom::add_click_listener(document, KISS_BUTTON_ID, move || {
        kiss.borrow_mut().push(clock.now(), SessionEvent::SetKissing);
    });
}

/// Rotation comes from the select's initial value and fit mode from the
/// canvas `data-fit` attribute; both are fixed for the session.
fn read_config(document: &web::Document, canvas: &web::HtmlCanvasElement) -> KissCamConfig {
    let rotation = dom::element_by_id::<web::HtmlSelectElement>(document, ROTATION_SELECT_ID)
        .ok()
        .map(|select| {
            // the session never re-reads it
            select.set_disabled(true);
            select.value()
        })
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<Rotation>().unwrap_or_else(|e| {
                log::warn!("[config] {}; using {}°", e, DEFAULT_ROTATION_DEG);
                Rotation::CounterClockwise
            })
        })
        .unwrap_or_else(|| Rotation::try_from(DEFAULT_ROTATION_DEG).unwrap_or_default());

    let fit = canvas
        .get_attribute(FIT_ATTRIBUTE)
        .map(|v| {
            v.parse::<FitMode>().unwrap_or_else(|e| {
                log::warn!("[config] {}; using cover", e);
                FitMode::Cover
            })
        })
        .unwrap_or_default();

    KissCamConfig::default().with_rotation(rotation).with_fit(fit)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kisscam-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let video: web::HtmlVideoElement = dom::element_by_id(&document, VIDEO_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let layer: web::HtmlElement = dom::element_by_id(&document, PARTICLES_ID)?;
    let message: Option<web::HtmlElement> = dom::element_by_id(&document, MESSAGE_ID).ok();
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = read_config(&document, &canvas);
    let surface = dom::viewport_surface(&window)?;
    dom::sync_canvas_backing_size(&canvas, &surface);

    let clock = SessionClock::start();
    let session = Rc::new(RefCell::new(KissCam::new(&config, surface)));

    wire_canvas_resize(&canvas, &session, clock);
    wire_scene_buttons(&document, &session, clock);
    events::wire_global_keydown(session.clone(), clock);
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        session: session.clone(),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        clock,
        video: video.clone(),
        target: render::CanvasTarget {
            ctx,
            video: video.clone(),
        },
        particles: particles::DomParticles::new(document.clone(), layer, message.clone()),
        last_outcome: None,
    }));

    // Enter the searching scene before the first frame so the message is set.
    {
        let mut ctx = frame_ctx.borrow_mut();
        let ctx = &mut *ctx;
        let mut session = ctx.session.borrow_mut();
        session.push(clock.now(), SessionEvent::SetSearching);
        session.dispatch(&mut ctx.particles);
    }

    // The loop idles until the camera delivers frames, or forever if it never does.
    frame::start_loop(frame_ctx);

    if let Err(e) = camera::start(&video).await {
        log::error!("[camera] {}", e);
        if let Some(message) = &message {
            message.set_text_content(Some(CAMERA_UNAVAILABLE_MESSAGE));
        }
    }

    Ok(())
}
