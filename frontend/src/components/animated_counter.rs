use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::COUNTER_DURATION_SECS;
use crate::interaction::frame::request_frames_or_settle;
use crate::interaction::media::use_viewport;
use crate::interaction::subscription::Subscription;
use crate::interaction::viewport::{use_in_view, ViewportOptions};
use crate::widgets::counter::{format_value, SpringCounter};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: f64,
    #[prop_or(COUNTER_DURATION_SECS)]
    pub duration_secs: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ViewportOptions::with_margin("-100px"));
    let reduced_motion = use_viewport().reduced_motion;
    let counter = SpringCounter::new(props.target, props.duration_secs);
    let display = use_state_eq(|| format_value(0.0, counter.decimals()));

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(in_view, counter)| {
                let counter = *counter;
                let subscription = if !*in_view {
                    Subscription::noop()
                } else if reduced_motion {
                    display.set(counter.display_at_rest());
                    Subscription::noop()
                } else {
                    let started_at = Rc::new(Cell::new(None::<f64>));
                    let on_frame = display.clone();
                    request_frames_or_settle(
                        move |timestamp| {
                            let start = started_at.get().unwrap_or(timestamp);
                            started_at.set(Some(start));
                            let elapsed = (timestamp - start) / 1000.0;
                            on_frame.set(counter.display_at(elapsed));
                            !counter.is_settled(elapsed)
                        },
                        || display.set(counter.display_at_rest()),
                    )
                };
                move || drop(subscription)
            },
            (in_view, counter),
        );
    }

    html! {
        <span ref={node} class={classes!("counter", props.class.clone())}>
            {&props.prefix}{(*display).clone()}{&props.suffix}
        </span>
    }
}
