use yew::prelude::*;

use crate::analytics::{track, AnalyticsEvent};
use crate::interaction::media::use_viewport;
use crate::interaction::viewport::{use_in_view, ViewportOptions};

const REVEAL_MARGIN: ViewportOptions = ViewportOptions::with_margin("-50px");

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Reports `section_view` under this name on first entry.
    #[prop_or_default]
    pub track_as: Option<&'static str>,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_MARGIN);
    let viewport = use_viewport();

    use_effect_with_deps(
        |(in_view, track_as)| {
            if let (true, Some(section)) = (*in_view, track_as) {
                track(AnalyticsEvent::SectionView {
                    section: section.to_string(),
                });
            }
            || ()
        },
        (in_view, props.track_as),
    );

    let visible = in_view || viewport.reduced_motion;
    let delay = viewport.transition_ms(props.delay_ms);
    let style = (delay > 0).then(|| format!("transition-delay: {}ms;", delay));

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
