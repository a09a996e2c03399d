use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

use super::subscription::Subscription;
use crate::config;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn media_query_list(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

/// Current value of a media query, `false` when matchMedia is unavailable.
pub fn media_query_matches(query: &str) -> bool {
    media_query_list(query).map(|list| list.matches()).unwrap_or(false)
}

/// Reads the query once and reports every later change.
pub fn observe_media_query(query: &str, on_change: Callback<bool>) -> (bool, Subscription) {
    let Some(list) = media_query_list(query) else {
        debug!("matchMedia unavailable for {}", query);
        return (false, Subscription::noop());
    };
    let initial = list.matches();

    let listener = {
        let list = list.clone();
        Closure::<dyn FnMut()>::new(move || on_change.emit(list.matches()))
    };
    if list
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_err()
    {
        debug!("change listener rejected for {}", query);
        return (initial, Subscription::noop());
    }

    let subscription = Subscription::new(move || {
        let _ = list.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    });
    (initial, subscription)
}

#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state_eq(|| media_query_matches(query));
    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |query| {
                let setter = matches.clone();
                let (initial, subscription) =
                    observe_media_query(query, Callback::from(move |value| setter.set(value)));
                matches.set(initial);
                move || drop(subscription)
            },
            query,
        );
    }
    *matches
}

#[hook]
pub fn use_reduced_motion() -> bool {
    use_media_query(REDUCED_MOTION_QUERY)
}

/// Layout and motion state shared by every section through context, so
/// breakpoints are evaluated in one place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Below the mobile breakpoint (sticky CTA, hero stagger, carousels).
    pub mobile: bool,
    /// Below the navigation breakpoint (header collapses into a menu).
    pub compact_nav: bool,
    pub reduced_motion: bool,
}

impl Viewport {
    /// Duration to use for a transition, collapsed to zero under reduced motion.
    pub fn transition_ms(&self, full_ms: u32) -> u32 {
        if self.reduced_motion {
            0
        } else {
            full_ms
        }
    }
}

/// Installed once by the page root.
#[hook]
pub fn use_viewport_source() -> Viewport {
    let mobile = use_media_query(config::MOBILE_QUERY);
    let compact_nav = use_media_query(config::COMPACT_NAV_QUERY);
    let reduced_motion = use_reduced_motion();
    Viewport {
        mobile,
        compact_nav,
        reduced_motion,
    }
}

#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_collapses_transitions() {
        let calm = Viewport {
            reduced_motion: true,
            ..Viewport::default()
        };
        assert_eq!(calm.transition_ms(300), 0);
        assert_eq!(Viewport::default().transition_ms(300), 300);
    }
}
