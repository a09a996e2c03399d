use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use super::subscription::Subscription;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    /// CSS margin applied to the viewport box, e.g. `"-50px"`.
    pub root_margin: &'static str,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px",
            threshold: 0.0,
        }
    }
}

impl ViewportOptions {
    pub const fn with_margin(root_margin: &'static str) -> Self {
        Self {
            root_margin,
            threshold: 0.0,
        }
    }
}

/// Opens on the first intersecting sample and stays open.
#[derive(Debug, Default)]
pub struct EntryLatch {
    fired: bool,
}

impl EntryLatch {
    /// Returns `true` only for the sample that first reports intersection.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

pub fn intersection_observer_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Fires `on_enter` once, the first time `element` intersects the viewport,
/// then stops observing. Without IntersectionObserver support it fires
/// immediately.
pub fn observe_viewport_entry(
    element: &Element,
    options: ViewportOptions,
    on_enter: Callback<()>,
) -> Subscription {
    let Some(window) = web_sys::window() else {
        on_enter.emit(());
        return Subscription::noop();
    };
    if !intersection_observer_supported(&window) {
        debug!("IntersectionObserver missing, revealing immediately");
        on_enter.emit(());
        return Subscription::noop();
    }

    let latch = Rc::new(RefCell::new(EntryLatch::default()));
    let callback = {
        let on_enter = on_enter.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.borrow_mut().observe(intersecting) {
                    observer.disconnect();
                    on_enter.emit(());
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            debug!("IntersectionObserver construction failed: {:?}", err);
            on_enter.emit(());
            return Subscription::noop();
        }
    };
    observer.observe(element);

    Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    })
}

/// `true` from the first time the referenced node enters the viewport for
/// the rest of the component's life.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewportOptions) -> bool {
    let entered = use_state_eq(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let on_enter = Callback::from(move |_| entered.set(true));
                let subscription = match node.cast::<Element>() {
                    Some(element) => observe_viewport_entry(&element, *options, on_enter),
                    None => {
                        on_enter.emit(());
                        Subscription::noop()
                    }
                };
                move || drop(subscription)
            },
            (node, options),
        );
    }
    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_on_first_intersection() {
        let mut latch = EntryLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.fired());
    }

    #[test]
    fn latch_ignores_repeated_scroll_in_and_out() {
        let mut latch = EntryLatch::default();
        let fired: Vec<bool> = [true, false, true, true, false, true]
            .into_iter()
            .map(|sample| latch.observe(sample))
            .collect();
        assert_eq!(fired, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn default_options_trigger_on_any_overlap() {
        let options = ViewportOptions::default();
        assert_eq!(options.root_margin, "0px");
        assert_eq!(options.threshold, 0.0);
        assert_eq!(ViewportOptions::with_margin("-50px").root_margin, "-50px");
    }
}
