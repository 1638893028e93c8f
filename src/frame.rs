use hero_core::{FrameClock, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver for a [`FrameScheduler`].
pub struct FrameLoop {
    tick: Tick,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

fn request(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("[hero] requestAnimationFrame failed: {:?}", e))
        .ok()
}

impl FrameLoop {
    pub fn start(scheduler: Rc<RefCell<FrameScheduler>>, mut clock: FrameClock) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));

        let tick_next = tick.clone();
        let running_tick = running.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            let time = clock.sample();
            scheduler.borrow_mut().tick(&time);
            if running_tick.get() {
                pending_tick.set(request(&tick_next));
            }
        }) as Box<dyn FnMut()>));

        pending.set(request(&tick));
        Self {
            tick,
            running,
            pending,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the queued frame and break the closure's self-reference.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(window)) = (self.pending.take(), web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
