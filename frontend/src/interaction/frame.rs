use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::subscription::Subscription;

type StepClosure = Closure<dyn FnMut(f64)>;

/// Calls `step` with the frame timestamp (ms) on every animation frame until
/// it returns `false` or the returned handle is dropped.
pub fn request_frames(mut step: impl FnMut(f64) -> bool + 'static) -> Subscription {
    let Some(window) = web_sys::window() else {
        debug!("no window, animation frames unavailable");
        return Subscription::noop();
    };

    let slot: Rc<RefCell<Option<StepClosure>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None::<i32>));

    let callback = {
        let slot = slot.clone();
        let pending = pending.clone();
        let window = window.clone();
        Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            pending.set(None);
            if !step(timestamp) {
                return;
            }
            if let Some(next) = slot.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    pending.set(Some(id));
                }
            }
        })
    };

    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(_) => {
            debug!("requestAnimationFrame rejected, animation skipped");
            return Subscription::noop();
        }
    }
    *slot.borrow_mut() = Some(callback);

    Subscription::new(move || {
        if let Some(id) = pending.take() {
            let _ = window.cancel_animation_frame(id);
        }
        // breaks the closure -> slot reference cycle
        slot.borrow_mut().take();
    })
}

/// `request_frames`, but runs `settle` at once when no frame can be
/// scheduled, so the animation lands on its final state instead of stalling.
pub fn request_frames_or_settle(
    step: impl FnMut(f64) -> bool + 'static,
    settle: impl FnOnce(),
) -> Subscription {
    settle_if_inactive(request_frames(step), settle)
}

fn settle_if_inactive(frames: Subscription, settle: impl FnOnce()) -> Subscription {
    if !frames.is_active() {
        settle();
    }
    frames
}

/// Collapses bursts of events into at most one `run` per animation frame.
pub struct FrameCoalescer {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl FrameCoalescer {
    pub fn new(window: Window, mut run: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None::<i32>));
        let callback = {
            let pending = pending.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                run();
            })
        };
        Self {
            window,
            pending,
            callback,
        }
    }

    pub fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(_) => debug!("requestAnimationFrame rejected, sample dropped"),
        }
    }
}

impl Drop for FrameCoalescer {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_when_frames_are_unavailable() {
        let settled = Cell::new(false);
        let frames = settle_if_inactive(Subscription::noop(), || settled.set(true));
        assert!(settled.get());
        assert!(!frames.is_active());
    }

    #[test]
    fn running_animation_is_left_alone() {
        let settled = Cell::new(false);
        let frames = settle_if_inactive(Subscription::new(|| {}), || settled.set(true));
        assert!(!settled.get());
        assert!(frames.is_active());
    }
}
