use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Owns the teardown of a browser listener, observer or frame request.
///
/// Dropping the handle releases whatever it guards, so returning it from a
/// `use_effect_with_deps` destructor ties the listener to the component's
/// lifetime.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Handle for a capability that was never attached.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Attaches `handler` to a window event until the handle drops.
pub fn listen_window(event: &'static str, handler: impl FnMut() + 'static) -> Subscription {
    let Some(window) = web_sys::window() else {
        return Subscription::noop();
    };
    let listener = Closure::<dyn FnMut()>::new(handler);
    if window
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .is_err()
    {
        debug!("{} listener rejected", event);
        return Subscription::noop();
    }
    Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn releases_exactly_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let sub = {
            let released = released.clone();
            Subscription::new(move || released.set(released.get() + 1))
        };
        assert!(sub.is_active());
        assert_eq!(released.get(), 0);
        drop(sub);
        assert_eq!(released.get(), 1);
    }


    #[test]
    fn noop_is_inactive() {
        assert!(!Subscription::noop().is_active());
    }
}
