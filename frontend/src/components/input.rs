use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// `aria-describedby` target: the error wins over the helper text.
pub fn described_by(id: &str, has_error: bool, has_helper: bool) -> Option<String> {
    if has_error {
        Some(format!("{}-error", id))
    } else if has_helper {
        Some(format!("{}-helper", id))
    } else {
        None
    }
}

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "field__control field__control--error"
    } else {
        "field__control"
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldChromeProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Label above, control, then either the error or the helper line.
#[function_component(FieldChrome)]
fn field_chrome(props: &FieldChromeProps) -> Html {
    html! {
        <div class="field">
            if let Some(label) = &props.label {
                <label class="field__label" for={props.id.clone()}>{label}</label>
            }
            { for props.children.iter() }
            if let Some(error) = &props.error {
                <p id={format!("{}-error", props.id)} class="field__error" role="alert">{error}</p>
            } else if let Some(helper) = &props.helper_text {
                <p id={format!("{}-helper", props.id)} class="field__helper">{helper}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub inputmode: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_value.emit(input.value());
        })
    };
    let has_error = props.error.is_some();
    let describedby = described_by(&props.id, has_error, props.helper_text.is_some());

    html! {
        <FieldChrome
            id={props.id.clone()}
            label={props.label.clone()}
            error={props.error.clone()}
            helper_text={props.helper_text.clone()}
        >
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                class={field_class(has_error)}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                inputmode={props.inputmode.clone()}
                disabled={props.disabled}
                required={props.required}
                aria-invalid={if has_error { "true" } else { "false" }}
                aria-describedby={describedby}
                {oninput}
            />
        </FieldChrome>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let on_value = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_value.emit(area.value());
        })
    };
    let has_error = props.error.is_some();
    let describedby = described_by(&props.id, has_error, props.helper_text.is_some());

    html! {
        <FieldChrome
            id={props.id.clone()}
            label={props.label.clone()}
            error={props.error.clone()}
            helper_text={props.helper_text.clone()}
        >
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                class={classes!(field_class(has_error), "field__control--multiline")}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                rows={props.rows.to_string()}
                disabled={props.disabled}
                aria-invalid={if has_error { "true" } else { "false" }}
                aria-describedby={describedby}
                {oninput}
            />
        </FieldChrome>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_takes_precedence_over_helper() {
        assert_eq!(described_by("email", true, true).as_deref(), Some("email-error"));
        assert_eq!(described_by("email", false, true).as_deref(), Some("email-helper"));
        assert_eq!(described_by("email", false, false), None);
    }

    #[test]
    fn error_state_changes_control_class() {
        assert!(field_class(true).contains("field__control--error"));
        assert!(!field_class(false).contains("error"));
    }
}
