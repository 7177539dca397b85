use dioxus::prelude::*;

use crate::components::inputs::{FieldInput, InputType};
use crate::features::registration::{RegistrationAction, RegistrationState, TextField};

#[derive(Props, PartialEq, Clone)]
pub struct TravelerFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_submit: EventHandler<()>,
}

/// Step 2 for travelers: identity and credentials, submitted directly.
#[component]
pub fn TravelerForm(props: TravelerFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let error = move |field: &str| state().field_error(field).map(str::to_string);

    rsx! {
        div {
            class: "wizard-form",
            FieldInput {
                label: "First Name".to_string(),
                value: state().form.first_name.clone(),
                placeholder: "Enter your first name".to_string(),
                input_type: InputType::Text,
                error: error("firstName"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::FirstName, value)),
            }
            FieldInput {
                label: "Last Name".to_string(),
                value: state().form.last_name.clone(),
                placeholder: "Enter your last name".to_string(),
                input_type: InputType::Text,
                error: error("lastName"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::LastName, value)),
            }
            div {
                class: "phone-row",
                FieldInput {
                    label: "Phone Number".to_string(),
                    value: state().form.phone_number.clone(),
                    placeholder: "Enter your phone number".to_string(),
                    input_type: InputType::Tel,
                    error: error("phoneNumber"),
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::PhoneNumber, value)),
                }
                button { class: "button primary send-code", "Send Code" }
            }
            FieldInput {
                label: "Password".to_string(),
                value: state().form.password.clone(),
                placeholder: "Enter password".to_string(),
                input_type: InputType::Password,
                error: error("password"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::Password, value)),
            }
            FieldInput {
                label: "Confirm Password".to_string(),
                value: state().form.confirm_password.clone(),
                placeholder: "Confirm password".to_string(),
                input_type: InputType::Password,
                error: error("confirmPassword"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::ConfirmPassword, value)),
            }

            button {
                class: "button primary full-width",
                disabled: state().is_submitting,
                onclick: move |_| props.on_submit.call(()),
                if state().is_submitting { "Submitting..." } else { "Continue" }
            }

            div {
                class: "auth-footer",
                span { "Already have an account? " }
                a { class: "auth-link", href: "/login", "Login Now" }
            }
        }
    }
}
