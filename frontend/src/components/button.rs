use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Link,
}

impl ButtonVariant {
    fn modifier(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn modifier(&self) -> &'static str {
        match self {
            ButtonSize::Default => "md",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn btn--{} btn--{}", variant.modifier(), size.modifier())
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders an anchor styled as a button instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(button_class(props.variant, props.size), props.class.clone());

    if let Some(href) = &props.href {
        let rel = props.target.as_ref().map(|_| "noopener noreferrer");
        return html! {
            <a
                href={href.clone()}
                target={props.target.clone()}
                {rel}
                role="button"
                aria-label={props.aria_label.clone()}
                {class}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </a>
        };
    }

    html! {
        <button
            type={props.button_type.clone()}
            class={class}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_primary_medium() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default()),
            "btn btn--primary btn--md"
        );
    }

    #[test]
    fn each_variant_gets_its_own_modifier() {
        assert_eq!(
            button_class(ButtonVariant::Secondary, ButtonSize::Lg),
            "btn btn--secondary btn--lg"
        );
        assert_eq!(
            button_class(ButtonVariant::Link, ButtonSize::Icon),
            "btn btn--link btn--icon"
        );
    }
}
