//! Per-subsystem frame contexts and the re-registering animation-frame loop.
//!
//! The two subsystems each own one [`FrameLoop`]; neither knows about the
//! other. `FrameLoop::cancel` drops the pending callback so teardown never
//! leaves a live reference to a detached canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use card_core::{SnowField, TreeScene};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FPS_LOG_INTERVAL_SECS;
use crate::draw;

/// A running requestAnimationFrame loop that re-registers itself each frame.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    _closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let closure_next = closure.clone();
        let raf_next = raf_id.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            tick(now_ms);
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    closure_next
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    raf_next.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));
        if let Some(w) = web::window() {
            if let Ok(id) = w
                .request_animation_frame(closure.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                raf_id.set(Some(id));
            }
        }
        Self {
            raf_id,
            _closure: closure,
        }
    }

    /// Unregister the pending callback; the loop stops after the current
    /// frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct FpsCounter {
    frames: u32,
    since: Instant,
    label: &'static str,
}

impl FpsCounter {
    fn new(label: &'static str) -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
            label,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed >= Duration::from_secs(FPS_LOG_INTERVAL_SECS) {
            log::debug!(
                "[{}] {:.1} fps",
                self.label,
                self.frames as f64 / elapsed.as_secs_f64()
            );
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

pub struct SnowFrame {
    field: Rc<RefCell<SnowField>>,
    ctx: web::CanvasRenderingContext2d,
    fps: FpsCounter,
}

impl SnowFrame {
    pub fn new(field: Rc<RefCell<SnowField>>, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            field,
            ctx,
            fps: FpsCounter::new("snow"),
        }
    }

    pub fn frame(&mut self, now_ms: f64) {
        let mut field = self.field.borrow_mut();
        field.advance(now_ms);
        draw::draw_snow(&self.ctx, &field);
        self.fps.tick();
    }
}

pub struct TreeFrame {
    scene: TreeScene,
    ctx: web::CanvasRenderingContext2d,
    fps: FpsCounter,
}

impl TreeFrame {
    pub fn new(scene: TreeScene, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            scene,
            ctx,
            fps: FpsCounter::new("tree"),
        }
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.scene.advance();
        draw::draw_tree(&self.ctx, &self.scene, now_ms);
        self.fps.tick();
    }
}
