use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;

use crate::interaction::scroll::observe_scroll;
use crate::interaction::subscription::listen_window;

/// Everything the page reports to the tag manager.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    CtaClick { location: String },
    ButtonClick { name: String },
    SectionView { section: String },
    FormStart,
    FormSubmit,
    FormError { field: String },
    ExternalLink { url: String },
    WhatsappClick { location: String },
    NewsletterSignup,
    Download { file: String },
    VideoPlay { video: String },
    ScrollDepth { percent: u8 },
    TimeOnPage { seconds: u64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventParams {
    pub event_category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

const CONTACT_FORM_LABEL: &str = "Contact Form";

impl AnalyticsEvent {
    pub fn cta(location: impl Into<String>) -> Self {
        AnalyticsEvent::CtaClick {
            location: location.into(),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::ButtonClick { .. } => "button_click",
            AnalyticsEvent::SectionView { .. } => "section_view",
            AnalyticsEvent::FormStart => "form_start",
            AnalyticsEvent::FormSubmit => "form_submit",
            AnalyticsEvent::FormError { .. } => "form_error",
            AnalyticsEvent::ExternalLink { .. } => "external_link",
            AnalyticsEvent::WhatsappClick { .. } => "whatsapp_click",
            AnalyticsEvent::NewsletterSignup => "newsletter_signup",
            AnalyticsEvent::Download { .. } => "download",
            AnalyticsEvent::VideoPlay { .. } => "video_play",
            AnalyticsEvent::ScrollDepth { .. } => "scroll_depth",
            AnalyticsEvent::TimeOnPage { .. } => "time_on_page",
        }
    }

    pub fn params(&self) -> EventParams {
        let (event_category, event_label, value) = match self {
            AnalyticsEvent::CtaClick { location } => ("Engagement", Some(location.clone()), Some(1.0)),
            AnalyticsEvent::ButtonClick { name } => ("Engagement", Some(name.clone()), Some(1.0)),
            AnalyticsEvent::SectionView { section } => ("Engagement", Some(section.clone()), None),
            AnalyticsEvent::FormStart => ("Contact", Some(CONTACT_FORM_LABEL.to_string()), None),
            AnalyticsEvent::FormSubmit => ("Contact", Some(CONTACT_FORM_LABEL.to_string()), Some(1.0)),
            AnalyticsEvent::FormError { field } => ("Contact", Some(field.clone()), None),
            AnalyticsEvent::ExternalLink { url } => ("Outbound", Some(url.clone()), None),
            AnalyticsEvent::WhatsappClick { location } => ("Contact", Some(location.clone()), Some(1.0)),
            AnalyticsEvent::NewsletterSignup => ("Lead", None, Some(1.0)),
            AnalyticsEvent::Download { file } => ("Engagement", Some(file.clone()), None),
            AnalyticsEvent::VideoPlay { video } => ("Engagement", Some(video.clone()), None),
            AnalyticsEvent::ScrollDepth { percent } => {
                ("Engagement", Some(format!("{}%", percent)), Some(f64::from(*percent)))
            }
            AnalyticsEvent::TimeOnPage { seconds } => ("Engagement", None, Some(*seconds as f64)),
        };
        EventParams {
            event_category,
            event_label,
            value,
        }
    }
}

fn gtag() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Fire-and-forget. Does nothing when the tag manager is not loaded.
pub fn track(event: AnalyticsEvent) {
    let params = event.params();
    debug!("analytics {} {:?}", event.action(), params);

    let Some(gtag) = gtag() else {
        return;
    };
    let payload = match serde_wasm_bindgen::to_value(&params) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("analytics payload not serialisable: {}", e);
            return;
        }
    };
    if let Err(err) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.action()),
        &payload,
    ) {
        debug!("gtag threw: {:?}", err);
    }
}

pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Remembers which scroll-depth milestones were already reported.
#[derive(Debug, Default)]
pub struct ScrollDepthTracker {
    reached: BTreeSet<u8>,
}

impl ScrollDepthTracker {
    /// Milestones crossed for the first time by this sample.
    pub fn record(&mut self, percent: f64) -> Vec<u8> {
        let mut crossed = Vec::new();
        for milestone in SCROLL_MILESTONES {
            if percent >= f64::from(milestone) && self.reached.insert(milestone) {
                crossed.push(milestone);
            }
        }
        crossed
    }
}

/// How far down the document the viewport is, 0..=100. A page too short to
/// scroll reports 0.
pub fn scroll_percentage(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[hook]
pub fn use_scroll_depth_tracking() {
    use_effect_with_deps(
        move |_| {
            let mut tracker = ScrollDepthTracker::default();
            let subscription = observe_scroll(move |window, offset| {
                let document_height = window
                    .document()
                    .and_then(|d| d.document_element())
                    .map(|root| f64::from(root.scroll_height()))
                    .unwrap_or(0.0);
                let viewport_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let percent = scroll_percentage(offset, document_height, viewport_height);
                for milestone in tracker.record(percent) {
                    track(AnalyticsEvent::ScrollDepth { percent: milestone });
                }
            });
            move || drop(subscription)
        },
        (),
    );
}

/// Reports whole seconds spent on the page when it is hidden for the first time.
#[hook]
pub fn use_time_on_page() {
    use_effect_with_deps(
        move |_| {
            let started = Utc::now();
            let reported = Rc::new(Cell::new(false));
            let subscription = listen_window("pagehide", move || {
                if reported.replace(true) {
                    return;
                }
                let seconds = (Utc::now() - started).num_seconds().max(0) as u64;
                track(AnalyticsEvent::TimeOnPage { seconds });
            });
            move || drop(subscription)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_names_match_tag_manager_vocabulary() {
        let events = [
            (AnalyticsEvent::cta("hero"), "cta_click"),
            (AnalyticsEvent::ButtonClick { name: "x".into() }, "button_click"),
            (AnalyticsEvent::SectionView { section: "faq".into() }, "section_view"),
            (AnalyticsEvent::FormStart, "form_start"),
            (AnalyticsEvent::FormSubmit, "form_submit"),
            (AnalyticsEvent::FormError { field: "email".into() }, "form_error"),
            (AnalyticsEvent::ExternalLink { url: "u".into() }, "external_link"),
            (AnalyticsEvent::WhatsappClick { location: "faq".into() }, "whatsapp_click"),
            (AnalyticsEvent::NewsletterSignup, "newsletter_signup"),
            (AnalyticsEvent::Download { file: "f".into() }, "download"),
            (AnalyticsEvent::VideoPlay { video: "v".into() }, "video_play"),
            (AnalyticsEvent::ScrollDepth { percent: 25 }, "scroll_depth"),
            (AnalyticsEvent::TimeOnPage { seconds: 3 }, "time_on_page"),
        ];
        for (event, action) in events {
            assert_eq!(event.action(), action);
        }
    }

    #[test]
    fn form_submit_payload() {
        let params = serde_json::to_value(AnalyticsEvent::FormSubmit.params()).unwrap();
        assert_eq!(
            params,
            json!({"event_category": "Contact", "event_label": "Contact Form", "value": 1.0})
        );
    }

    #[test]
    fn optional_fields_are_left_out() {
        let newsletter = serde_json::to_value(AnalyticsEvent::NewsletterSignup.params()).unwrap();
        assert_eq!(newsletter, json!({"event_category": "Lead", "value": 1.0}));

        let view = serde_json::to_value(
            AnalyticsEvent::SectionView {
                section: "metrics".into(),
            }
            .params(),
        )
        .unwrap();
        assert_eq!(view, json!({"event_category": "Engagement", "event_label": "metrics"}));
    }

    #[test]
    fn scroll_depth_labels_with_percent_sign() {
        let params = AnalyticsEvent::ScrollDepth { percent: 75 }.params();
        assert_eq!(params.event_label.as_deref(), Some("75%"));
        assert_eq!(params.value, Some(75.0));
    }

    #[test]
    fn milestones_are_reported_once_each() {
        let mut tracker = ScrollDepthTracker::default();
        assert!(tracker.record(10.0).is_empty());
        assert_eq!(tracker.record(55.0), vec![25, 50]);
        assert!(tracker.record(52.0).is_empty());
        assert!(tracker.record(30.0).is_empty());
        assert_eq!(tracker.record(100.0), vec![75, 100]);
        assert!(tracker.record(100.0).is_empty());
    }

    #[test]
    fn percentage_handles_short_pages() {
        assert_eq!(scroll_percentage(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_percentage(500.0, 1800.0, 800.0), 50.0);
        assert_eq!(scroll_percentage(1200.0, 1800.0, 800.0), 100.0);
    }
}
