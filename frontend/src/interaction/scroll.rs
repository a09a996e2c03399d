use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};
use yew::prelude::*;

use super::frame::FrameCoalescer;
use super::subscription::Subscription;

/// Tracks which side of a vertical scroll threshold the page is on.
///
/// An offset equal to the threshold counts as past it. There is no
/// hysteresis: the state flips on every crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    threshold: f64,
    past: bool,
}

impl ScrollThreshold {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    pub fn is_past(&self, offset: f64) -> bool {
        offset >= self.threshold
    }

    #[cfg(test)]
    pub fn past(&self) -> bool {
        self.past
    }

    /// Feeds one offset sample, returning the new state only when it changed.
    pub fn sample(&mut self, offset: f64) -> Option<bool> {
        let now = self.is_past(offset);
        if now == self.past {
            return None;
        }
        self.past = now;
        Some(now)
    }
}

pub fn current_scroll_offset(window: &Window) -> f64 {
    window
        .scroll_y()
        .ok()
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|root| f64::from(root.scroll_top()))
        })
        .unwrap_or(0.0)
}

/// Samples the scroll offset at most once per animation frame, plus once
/// right after attaching.
pub fn observe_scroll(mut on_sample: impl FnMut(&Window, f64) + 'static) -> Subscription {
    let Some(window) = web_sys::window() else {
        debug!("no window, scroll observer not attached");
        return Subscription::noop();
    };

    let sampler = {
        let window = window.clone();
        Rc::new(FrameCoalescer::new(window.clone(), move || {
            let offset = current_scroll_offset(&window);
            on_sample(&window, offset);
        }))
    };

    let listener = {
        let sampler = sampler.clone();
        Closure::<dyn FnMut()>::new(move || sampler.schedule())
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            listener.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        debug!("scroll listener rejected");
        return Subscription::noop();
    }

    sampler.schedule();

    Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        drop(sampler);
    })
}

/// Emits `true` when the page scrolls to or past `threshold` pixels and
/// `false` when it comes back above it.
pub fn observe_scroll_threshold(threshold: f64, on_change: Callback<bool>) -> Subscription {
    let mut gate = ScrollThreshold::new(threshold);
    observe_scroll(move |_, offset| {
        if let Some(past) = gate.sample(offset) {
            on_change.emit(past);
        }
    })
}

#[hook]
pub fn use_scroll_threshold(threshold: f64) -> bool {
    let past = use_state_eq(|| false);
    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let subscription =
                    observe_scroll_threshold(*threshold, Callback::from(move |value| past.set(value)));
                move || drop(subscription)
            },
            threshold,
        );
    }
    *past
}

/// Smooth-scrolls the element with the given id to the top of the viewport.
/// Returns `false` when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_below_threshold_are_not_past() {
        let gate = ScrollThreshold::new(800.0);
        for offset in [0.0, 1.0, 400.0, 799.0, 799.99] {
            assert!(!gate.is_past(offset), "offset {offset}");
        }
    }

    #[test]
    fn offsets_at_or_above_threshold_are_past() {
        let gate = ScrollThreshold::new(800.0);
        for offset in [800.0, 800.5, 1200.0, 10_000.0] {
            assert!(gate.is_past(offset), "offset {offset}");
        }
    }

    #[test]
    fn sample_reports_only_crossings() {
        let mut gate = ScrollThreshold::new(50.0);
        assert_eq!(gate.sample(0.0), None);
        assert_eq!(gate.sample(20.0), None);
        assert_eq!(gate.sample(50.0), Some(true));
        assert_eq!(gate.sample(300.0), None);
        assert_eq!(gate.sample(49.0), Some(false));
        assert_eq!(gate.sample(10.0), None);
        assert!(!gate.past());
    }

    #[test]
    fn initial_sample_past_threshold_reports_true() {
        let mut gate = ScrollThreshold::new(800.0);
        assert_eq!(gate.sample(2_000.0), Some(true));
        assert!(gate.past());
    }

    #[test]
    fn state_follows_offset_with_no_hysteresis() {
        let mut gate = ScrollThreshold::new(100.0);
        let offsets = [0.0, 99.0, 100.0, 99.0, 100.0, 150.0, 0.0];
        for offset in offsets {
            gate.sample(offset);
            assert_eq!(gate.past(), offset >= 100.0, "offset {offset}");
        }
    }
}
