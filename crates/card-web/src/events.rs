//! Event wiring. Every listener is held in a [`ListenerGuard`] so mount and
//! teardown stay symmetric: dropping the guard removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use card_core::SnowField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Keeps a registered event listener alive and removes it on drop.
pub struct ListenerGuard<T: ?Sized> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
}

impl<T: ?Sized> ListenerGuard<T> {
    pub fn attach(target: &web::EventTarget, event: &'static str, closure: Closure<T>) -> Self {
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl<T: ?Sized> Drop for ListenerGuard<T> {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub struct SnowWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<SnowField>>,
}

pub struct SnowListeners {
    pub pointer_move: ListenerGuard<dyn FnMut(web::PointerEvent)>,
    pub click: ListenerGuard<dyn FnMut(web::MouseEvent)>,
    pub resize: ListenerGuard<dyn FnMut()>,
}

/// Wire the snow field's three event sources: pointer tracking for the
/// repulsion term, clicks for bursts, resize for population regeneration.
/// The click listener is additive with the page-level first-interaction gate.
pub fn wire_snow(w: SnowWiring) -> SnowListeners {
    let pointer_move = {
        let field = w.field.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            field
                .borrow_mut()
                .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(web::PointerEvent)>);
        ListenerGuard::attach(w.window.as_ref(), "pointermove", closure)
    };

    let click = {
        let field = w.field.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            field
                .borrow_mut()
                .spawn_burst(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(web::MouseEvent)>);
        ListenerGuard::attach(w.window.as_ref(), "click", closure)
    };

    let resize = {
        let field = w.field.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(win) = web::window() {
                let (width, height) = dom::viewport_size(&win);
                dom::size_canvas(&canvas, width, height);
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>);
        ListenerGuard::attach(w.window.as_ref(), "resize", closure)
    };

    SnowListeners {
        pointer_move,
        click,
        resize,
    }
}
