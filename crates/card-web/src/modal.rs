//! The date-gated gift modal. Shown and hidden via the `style` attribute;
//! the open button only works once the local clock passes the cutoff.

use card_core::{gate, GIFT_CUTOFF_LOCAL};
use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::constants::{GIFT_BUTTON_ID, GIFT_CLOSE_ID, GIFT_MODAL_ID};
use crate::events::ListenerGuard;

/// The reveal cutoff as an epoch timestamp in the viewer's time zone.
pub fn local_cutoff_ms() -> f64 {
    let (year, month, day, hour) = GIFT_CUTOFF_LOCAL;
    js_sys::Date::new_with_year_month_day_hr(year, month as i32 - 1, day as i32, hour as i32)
        .get_time()
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GIFT_MODAL_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GIFT_MODAL_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub struct ModalListeners {
    pub open: Option<ListenerGuard<dyn FnMut()>>,
    pub close: Option<ListenerGuard<dyn FnMut()>>,
}

pub fn wire(document: &web::Document) -> ModalListeners {
    let open = document.get_element_by_id(GIFT_BUTTON_ID).map(|el| {
        let doc = document.clone();
        let cutoff = local_cutoff_ms();
        let closure = Closure::wrap(Box::new(move || {
            if gate::is_unlocked(js_sys::Date::now(), cutoff) {
                show(&doc);
            } else {
                log::info!("gift still locked until the cutoff date");
            }
        }) as Box<dyn FnMut()>);
        ListenerGuard::attach(el.as_ref(), "click", closure)
    });

    let close = document.get_element_by_id(GIFT_CLOSE_ID).map(|el| {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            hide(&doc);
        }) as Box<dyn FnMut()>);
        ListenerGuard::attach(el.as_ref(), "click", closure)
    });

    ModalListeners { open, close }
}
