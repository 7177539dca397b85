//! Input components shared by the auth forms.

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldInputProps {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    /// Current validation message for this field, if any.
    pub error: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// A labelled input with inline error display. The error border and the
/// message come and go together with the entry in the error map.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let input_class = if props.error.is_some() {
        "input-field input-invalid"
    } else {
        "input-field"
    };

    rsx! {
        div {
            class: "field-block",
            label {
                class: "field-label",
                "{props.label}"
                if props.required {
                    span { class: "required-mark", " *" }
                }
            }
            input {
                class: "{input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
            if let Some(message) = &props.error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxFieldProps {
    pub checked: bool,
    pub error: Option<String>,
    pub on_change: EventHandler<bool>,
    pub children: Element,
}

/// Checkbox with a rich label (links etc.) passed as children.
#[component]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    rsx! {
        div {
            class: "checkbox-block",
            input {
                r#type: "checkbox",
                class: if props.error.is_some() { "checkbox-input input-invalid" } else { "checkbox-input" },
                checked: props.checked,
                onchange: move |event| props.on_change.call(event.checked())
            }
            div {
                label { class: "checkbox-label", {props.children} }
                if let Some(message) = &props.error {
                    p { class: "field-error", "{message}" }
                }
            }
        }
    }
}
