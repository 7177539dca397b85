use dioxus::prelude::*;

use crate::components::inputs::{CheckboxField, FieldInput, InputType};
use crate::features::registration::{BoolField, RegistrationAction, RegistrationState, TextField};

#[derive(Props, PartialEq, Clone)]
pub struct VolunteerFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_submit: EventHandler<()>,
}

/// Step 2 for volunteers: the traveler fields plus identification details
/// and an explicit terms acceptance.
#[component]
pub fn VolunteerForm(props: VolunteerFormProps) -> Element {
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
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::FirstName, value)),
            }
            FieldInput {
                label: "Last Name".to_string(),
                value: state().form.last_name.clone(),
                placeholder: "Enter your last name".to_string(),
                input_type: InputType::Text,
                error: error("lastName"),
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::LastName, value)),
            }
            FieldInput {
                label: "Phone Number".to_string(),
                value: state().form.phone_number.clone(),
                placeholder: "Enter your phone number".to_string(),
                input_type: InputType::Tel,
                error: error("phoneNumber"),
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::PhoneNumber, value)),
            }
            FieldInput {
                label: "Email Address".to_string(),
                value: state().form.email.clone(),
                placeholder: "Enter your email address".to_string(),
                input_type: InputType::Email,
                error: error("email"),
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::Email, value)),
            }
            FieldInput {
                label: "National ID Number".to_string(),
                value: state().form.national_id.clone(),
                placeholder: "Enter your national ID number".to_string(),
                input_type: InputType::Text,
                error: error("nationalId"),
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::NationalId, value)),
            }
            FieldInput {
                label: "Year of Birth".to_string(),
                value: state().form.year_of_birth.clone(),
                placeholder: "YYYY".to_string(),
                input_type: InputType::Text,
                error: error("yearOfBirth"),
                required: true,
                on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::YearOfBirth, value)),
            }

            div {
                class: "field-block",
                label { class: "field-label", "Additional Information (Optional)" }
                textarea {
                    class: "input-field textarea",
                    placeholder: "Enter any additional information",
                    value: "{state().form.additional_info}",
                    oninput: move |event| {
                        dispatch.call(RegistrationAction::SetText(TextField::AdditionalInfo, event.value()))
                    }
                }
            }

            CheckboxField {
                checked: state().form.accept_terms,
                error: error("acceptTerms"),
                on_change: move |checked| dispatch.call(RegistrationAction::SetFlag(BoolField::AcceptTerms, checked)),
                span {
                    "I accept the "
                    a { class: "auth-link", href: "/privacy", "Privacy Policy" }
                    " and "
                    a { class: "auth-link", href: "/terms", "Terms of Service" }
                }
            }

            button {
                class: "button primary full-width",
                disabled: state().is_submitting,
                onclick: move |_| props.on_submit.call(()),
                if state().is_submitting { "Submitting..." } else { "Submit Registration" }
            }

            div {
                class: "auth-footer",
                span { "Already have an account? " }
                a { class: "auth-link", href: "/login", "Login Now" }
            }
        }
    }
}
