use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Default,
    Lg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardRadius {
    Sm,
    #[default]
    Default,
    Lg,
}

pub fn card_class(variant: CardVariant, padding: CardPadding, radius: CardRadius) -> String {
    let variant = match variant {
        CardVariant::Default => "card--flat",
        CardVariant::Elevated => "card--elevated",
    };
    let padding = match padding {
        CardPadding::None => "pad-0",
        CardPadding::Sm => "pad-sm",
        CardPadding::Default => "pad-md",
        CardPadding::Lg => "pad-lg",
    };
    let radius = match radius {
        CardRadius::Sm => "radius-sm",
        CardRadius::Default => "radius-md",
        CardRadius::Lg => "radius-lg",
    };
    format!("card {} {} {}", variant, padding, radius)
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub padding: CardPadding,
    #[prop_or_default]
    pub radius: CardRadius,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(card_class(props.variant, props.padding, props.radius), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardSlotProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardSlotProps) -> Html {
    html! { <div class={classes!("card__header", props.class.clone())}>{ for props.children.iter() }</div> }
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardSlotProps) -> Html {
    html! { <h3 class={classes!("card__title", props.class.clone())}>{ for props.children.iter() }</h3> }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardSlotProps) -> Html {
    html! { <p class={classes!("card__description", props.class.clone())}>{ for props.children.iter() }</p> }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardSlotProps) -> Html {
    html! { <div class={classes!("card__content", props.class.clone())}>{ for props.children.iter() }</div> }
}

#[function_component(CardFooter)]
pub fn card_footer(props: &CardSlotProps) -> Html {
    html! { <div class={classes!("card__footer", props.class.clone())}>{ for props.children.iter() }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_is_flat_medium() {
        assert_eq!(
            card_class(CardVariant::default(), CardPadding::default(), CardRadius::default()),
            "card card--flat pad-md radius-md"
        );
    }

    #[test]
    fn elevated_large_card() {
        assert_eq!(
            card_class(CardVariant::Elevated, CardPadding::Lg, CardRadius::Lg),
            "card card--elevated pad-lg radius-lg"
        );
    }
}
