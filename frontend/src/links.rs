use crate::analytics::{track, AnalyticsEvent};
use crate::config;
use crate::interaction::scroll::scroll_to_section;
use yew::prelude::*;

pub const DEFAULT_WHATSAPP_MESSAGE: &str =
    "Olá! Vim do site e gostaria de saber mais sobre agentes de IA.";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/company/procex-ai"),
    ("Instagram", "https://www.instagram.com/procex.ai"),
    ("YouTube", "https://www.youtube.com/@procexai"),
];

/// `https://wa.me/<number>` with the message pre-filled, if any.
pub fn whatsapp_link_for(number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => {
            format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
        }
        _ => format!("https://wa.me/{}", number),
    }
}

pub fn whatsapp_link(message: Option<&str>) -> String {
    whatsapp_link_for(config::get_whatsapp_number(), message)
}

pub fn on_whatsapp_click(location: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        track(AnalyticsEvent::WhatsappClick {
            location: location.to_string(),
        })
    })
}

pub fn on_external_click(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        track(AnalyticsEvent::ExternalLink {
            url: url.to_string(),
        })
    })
}

/// Call-to-action that reports the click and scrolls to an in-page section.
pub fn on_section_cta(section: &'static str, location: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        track(AnalyticsEvent::cta(location));
        scroll_to_section(section);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_message_is_url_encoded() {
        let link = whatsapp_link_for("5511999999999", Some("Olá! Tudo bem?"));
        assert_eq!(link, "https://wa.me/5511999999999?text=Ol%C3%A1%21%20Tudo%20bem%3F");
    }

    #[test]
    fn bare_link_without_message() {
        assert_eq!(whatsapp_link_for("5511999999999", None), "https://wa.me/5511999999999");
        assert_eq!(whatsapp_link_for("5511999999999", Some("")), "https://wa.me/5511999999999");
    }
}
