use dioxus::prelude::*;

use crate::components::inputs::{FieldInput, InputType};
use crate::features::registration::{RegistrationAction, RegistrationState, TextField};

#[derive(Props, PartialEq, Clone)]
pub struct AdminAccountFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
}

/// Step 2 for organization admins. Continuing to verification intentionally
/// skips validation here; these fields are picked up by the final submit.
#[component]
pub fn AdminAccountForm(props: AdminAccountFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let error = move |field: &str| state().field_error(field).map(str::to_string);

    rsx! {
        div {
            class: "wizard-form",
            FieldInput {
                label: "First Name".to_string(),
                value: state().form.first_name.clone(),
                placeholder: "Enter first name".to_string(),
                input_type: InputType::Text,
                error: error("firstName"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::FirstName, value)),
            }
            FieldInput {
                label: "Last Name".to_string(),
                value: state().form.last_name.clone(),
                placeholder: "Enter last name".to_string(),
                input_type: InputType::Text,
                error: error("lastName"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::LastName, value)),
            }
            FieldInput {
                label: "Email Address".to_string(),
                value: state().form.email.clone(),
                placeholder: "Enter email address".to_string(),
                input_type: InputType::Email,
                error: error("email"),
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::Email, value)),
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
                onclick: move |_| dispatch.call(RegistrationAction::AdvanceToVerification),
                "Continue"
            }

            div {
                class: "auth-footer",
                span { "Already have an account? " }
                a { class: "auth-link", href: "/login", "Login Now" }
            }
        }
    }
}
