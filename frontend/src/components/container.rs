use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
    Xxl,
    Hero,
    Full,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerPadding {
    None,
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerVertical {
    #[default]
    None,
    Sm,
    Default,
    Lg,
    Xl,
    Hero,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerTag {
    #[default]
    Div,
    Section,
    Article,
    Main,
    Aside,
    Header,
    Footer,
}

impl ContainerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerTag::Div => "div",
            ContainerTag::Section => "section",
            ContainerTag::Article => "article",
            ContainerTag::Main => "main",
            ContainerTag::Aside => "aside",
            ContainerTag::Header => "header",
            ContainerTag::Footer => "footer",
        }
    }
}

pub fn container_class(size: ContainerSize, padding: ContainerPadding, vertical: ContainerVertical) -> String {
    let size = match size {
        ContainerSize::Sm => "w-sm",
        ContainerSize::Md => "w-md",
        ContainerSize::Lg => "w-lg",
        ContainerSize::Xl => "w-xl",
        ContainerSize::Xxl => "w-2xl",
        ContainerSize::Hero => "w-hero",
        ContainerSize::Full => "w-full",
    };
    let padding = match padding {
        ContainerPadding::None => "px-0",
        ContainerPadding::Sm => "px-sm",
        ContainerPadding::Default => "px-md",
        ContainerPadding::Lg => "px-lg",
        ContainerPadding::Xl => "px-xl",
    };
    let vertical = match vertical {
        ContainerVertical::None => "py-0",
        ContainerVertical::Sm => "py-sm",
        ContainerVertical::Default => "py-md",
        ContainerVertical::Lg => "py-lg",
        ContainerVertical::Xl => "py-xl",
        ContainerVertical::Hero => "py-hero",
    };
    format!("container {} {} {}", size, padding, vertical)
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub size: ContainerSize,
    #[prop_or_default]
    pub padding: ContainerPadding,
    #[prop_or_default]
    pub vertical: ContainerVertical,
    #[prop_or_default]
    pub tag: ContainerTag,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    let class = classes!(
        container_class(props.size, props.padding, props.vertical),
        props.class.clone()
    );
    html! {
        <@{props.tag.as_str()} id={props.id.clone()} {class}>
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_container_matches_page_width() {
        assert_eq!(
            container_class(ContainerSize::default(), ContainerPadding::default(), ContainerVertical::default()),
            "container w-xl px-md py-0"
        );
    }

    #[test]
    fn hero_container() {
        assert_eq!(
            container_class(ContainerSize::Hero, ContainerPadding::Xl, ContainerVertical::Hero),
            "container w-hero px-xl py-hero"
        );
        assert_eq!(ContainerTag::Footer.as_str(), "footer");
    }
}
