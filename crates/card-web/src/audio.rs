//! Background music gate: browsers block autoplay, so the looping track
//! starts on the first click anywhere on the page. A rejected play promise is
//! logged and swallowed; it never blocks the rest of the card.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::events::ListenerGuard;

pub fn wire_first_interaction(
    document: &web::Document,
    audio: web::HtmlAudioElement,
) -> ListenerGuard<dyn FnMut()> {
    let started = Rc::new(Cell::new(false));
    let closure = Closure::wrap(Box::new(move || {
        if started.replace(true) {
            return;
        }
        play_or_log(&audio);
    }) as Box<dyn FnMut()>);
    ListenerGuard::attach(document.as_ref(), "click", closure)
}

fn play_or_log(audio: &web::HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => {
            let on_err = Closure::wrap(Box::new(|err: JsValue| {
                log::warn!("audio playback failed: {err:?}");
            }) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&on_err);
            on_err.forget();
        }
        Err(err) => log::warn!("audio playback failed: {err:?}"),
    }
}
