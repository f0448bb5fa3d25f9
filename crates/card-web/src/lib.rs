#![cfg(target_arch = "wasm32")]

//! WASM entry point for the greeting card. Builds the two animation
//! subsystems (viewport snow, rotating tree), the audio gate and the gift
//! modal, each degrading to a no-op if its piece of the page is missing.

use std::cell::RefCell;
use std::rc::Rc;

use card_core::{SnowField, TreeScene, SCENE_HEIGHT, SCENE_WIDTH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod draw;
mod events;
mod frame;
mod modal;

use constants::{AUDIO_ID, SNOW_CANVAS_ID, TREE_CANVAS_ID};
use frame::FrameLoop;

// Fields exist for their Drop side effects only.
#[allow(dead_code)]
struct SnowHandle {
    frame_loop: FrameLoop,
    listeners: events::SnowListeners,
}

// Wiring kept alive for the page lifetime; dropping it tears the card down
// (pending frame callbacks cancelled, listeners removed).
#[allow(dead_code)]
#[derive(Default)]
struct AppHandles {
    snow: Option<SnowHandle>,
    tree: Option<FrameLoop>,
    audio: Option<events::ListenerGuard<dyn FnMut()>>,
    modal: Option<modal::ModalListeners>,
}

thread_local! {
    static APP: RefCell<Option<AppHandles>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("winter-card starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let seed = js_sys::Date::now() as u64;

    let mut handles = AppHandles::default();

    // Both subsystems are best-effort decoration; a missing canvas disables
    // that subsystem and nothing else.
    match init_snow(&window, &document, seed) {
        Ok(h) => handles.snow = Some(h),
        Err(e) => log::warn!("snow field disabled: {e:?}"),
    }
    match init_tree(&document, seed ^ 0x9E37_79B9_7F4A_7C15) {
        Ok(l) => handles.tree = Some(l),
        Err(e) => log::warn!("tree scene disabled: {e:?}"),
    }

    handles.audio = document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
        .map(|a| audio::wire_first_interaction(&document, a));
    if handles.audio.is_none() {
        log::warn!("background music disabled: missing #{AUDIO_ID}");
    }
    handles.modal = Some(modal::wire(&document));

    APP.with(|app| *app.borrow_mut() = Some(handles));
    Ok(())
}

fn init_snow(
    window: &web::Window,
    document: &web::Document,
    seed: u64,
) -> anyhow::Result<SnowHandle> {
    let canvas = dom::canvas_by_id(document, SNOW_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let (width, height) = dom::viewport_size(window);
    dom::size_canvas(&canvas, width, height);

    let field = Rc::new(RefCell::new(SnowField::new(width, height, seed)));
    let listeners = events::wire_snow(events::SnowWiring {
        window: window.clone(),
        canvas,
        field: field.clone(),
    });
    let mut snow_frame = frame::SnowFrame::new(field, ctx);
    let frame_loop = FrameLoop::start(move |now_ms| snow_frame.frame(now_ms));
    Ok(SnowHandle {
        frame_loop,
        listeners,
    })
}

fn init_tree(document: &web::Document, seed: u64) -> anyhow::Result<FrameLoop> {
    let canvas = dom::canvas_by_id(document, TREE_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    dom::size_canvas(&canvas, SCENE_WIDTH, SCENE_HEIGHT);

    let mut tree_frame = frame::TreeFrame::new(TreeScene::new(seed), ctx);
    Ok(FrameLoop::start(move |now_ms| tree_frame.frame(now_ms)))
}
