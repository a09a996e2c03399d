use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Accent,
    Warning,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Default,
    Lg,
}

pub fn badge_class(variant: BadgeVariant, size: BadgeSize, interactive: bool) -> String {
    let variant = match variant {
        BadgeVariant::Default => "badge--default",
        BadgeVariant::Secondary => "badge--secondary",
        BadgeVariant::Outline => "badge--outline",
        BadgeVariant::Accent => "badge--accent",
        BadgeVariant::Warning => "badge--warning",
        BadgeVariant::Success => "badge--success",
        BadgeVariant::Error => "badge--error",
    };
    let size = match size {
        BadgeSize::Sm => "badge--sm",
        BadgeSize::Default => "badge--md",
        BadgeSize::Lg => "badge--lg",
    };
    let mut class = format!("badge {} {}", variant, size);
    if interactive {
        class.push_str(" badge--interactive");
    }
    class
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub size: BadgeSize,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub interactive: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let class = classes!(badge_class(props.variant, props.size, props.interactive), props.class.clone());
    let role = props.interactive.then_some("button");
    let tabindex = props.interactive.then_some("0");

    html! {
        <div {class} {role} {tabindex} onclick={props.onclick.clone()}>
            if let Some(icon) = &props.icon {
                <span class="badge__icon" aria-hidden="true">{icon.clone()}</span>
            }
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeGroupProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BadgeGroup)]
pub fn badge_group(props: &BadgeGroupProps) -> Html {
    html! {
        <div class={classes!("badge-group", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_badges_get_pointer_modifier() {
        assert_eq!(
            badge_class(BadgeVariant::Accent, BadgeSize::Sm, true),
            "badge badge--accent badge--sm badge--interactive"
        );
        assert_eq!(
            badge_class(BadgeVariant::default(), BadgeSize::default(), false),
            "badge badge--default badge--md"
        );
    }
}
