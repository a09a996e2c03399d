use yew::prelude::*;

use super::button::{Button, ButtonSize, ButtonVariant};
use crate::analytics::{track, AnalyticsEvent};
use crate::config::STICKY_CTA_THRESHOLD_PX;
use crate::interaction::media::use_viewport;
use crate::interaction::scroll::use_scroll_threshold;

pub fn sticky_cta_visible(mobile: bool, past_threshold: bool) -> bool {
    mobile && past_threshold
}

#[derive(Properties, PartialEq)]
pub struct StickyMobileCtaProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or(STICKY_CTA_THRESHOLD_PX)]
    pub threshold: f64,
}

/// Bottom call to action shown on phones once the visitor scrolls past the hero.
#[function_component(StickyMobileCta)]
pub fn sticky_mobile_cta(props: &StickyMobileCtaProps) -> Html {
    let viewport = use_viewport();
    let past = use_scroll_threshold(props.threshold);

    if !viewport.mobile {
        return html! {};
    }
    let visible = sticky_cta_visible(viewport.mobile, past);

    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::cta("sticky_mobile"));
            if let Some(on_click) = &on_click {
                on_click.emit(());
            }
        })
    };
    let style = viewport.reduced_motion.then_some("transition: none;");

    html! {
        <div
            class={classes!("sticky-cta", visible.then_some("is-visible"))}
            {style}
            aria-hidden={if visible { "false" } else { "true" }}
        >
            if let Some(message) = &props.message {
                <p class="sticky-cta__message">{message}</p>
            }
            <Button
                variant={props.variant}
                size={ButtonSize::Lg}
                href={props.href.clone()}
                onclick={Some(onclick)}
                class="sticky-cta__button"
            >
                {&props.text}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_visible_on_mobile_past_threshold() {
        assert!(sticky_cta_visible(true, true));
        assert!(!sticky_cta_visible(true, false));
        assert!(!sticky_cta_visible(false, true));
        assert!(!sticky_cta_visible(false, false));
    }
}
