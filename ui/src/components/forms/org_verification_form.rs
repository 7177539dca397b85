use dioxus::prelude::*;

use crate::components::forms::document_upload::DocumentUpload;
use crate::components::inputs::{CheckboxField, FieldInput, InputType};
use crate::features::registration::{BoolField, RegistrationAction, RegistrationState, TextField};

#[derive(Props, PartialEq, Clone)]
pub struct OrgVerificationFormProps {
    pub state: Signal<RegistrationState>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_submit: EventHandler<()>,
}

/// Step 3 (admin only): organization details and required documents.
/// Going back keeps every entered field and every attached file.
#[component]
pub fn OrgVerificationForm(props: OrgVerificationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let error = move |field: &str| state().field_error(field).map(str::to_string);

    rsx! {
        div {
            class: "wizard-form org-form",
            div {
                class: "org-form-intro",
                h2 { class: "form-title", "Organization Verification Details" }
                p { class: "form-subtitle", "Please provide information about your organization" }
            }

            div {
                class: "org-grid",
                FieldInput {
                    label: "Organization Name".to_string(),
                    value: state().form.org_name.clone(),
                    placeholder: "Enter organization name".to_string(),
                    input_type: InputType::Text,
                    error: error("orgName"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::OrgName, value)),
                }
                FieldInput {
                    label: "Organization Phone".to_string(),
                    value: state().form.org_phone.clone(),
                    placeholder: "Enter organization phone".to_string(),
                    input_type: InputType::Tel,
                    error: error("orgPhone"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::OrgPhone, value)),
                }
                FieldInput {
                    label: "Complete Address".to_string(),
                    value: state().form.address.clone(),
                    placeholder: "Enter complete address".to_string(),
                    input_type: InputType::Text,
                    error: error("address"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::Address, value)),
                }
                FieldInput {
                    label: "Tax ID Number".to_string(),
                    value: state().form.tax_id.clone(),
                    placeholder: "Enter Tax ID".to_string(),
                    input_type: InputType::Text,
                    error: error("taxId"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::TaxId, value)),
                }
                FieldInput {
                    label: "Non-Profit Registration Number".to_string(),
                    value: state().form.non_profit_id.clone(),
                    placeholder: "Enter registration number".to_string(),
                    input_type: InputType::Text,
                    error: error("nonProfitId"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::NonProfitId, value)),
                }
                FieldInput {
                    label: "Year Established".to_string(),
                    value: state().form.year_established.clone(),
                    placeholder: "Enter year".to_string(),
                    input_type: InputType::Text,
                    error: error("yearEstablished"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::YearEstablished, value)),
                }
                FieldInput {
                    label: "Monthly People Served".to_string(),
                    value: state().form.people_served.clone(),
                    placeholder: "Enter number of people".to_string(),
                    input_type: InputType::Text,
                    error: error("peopleServed"),
                    required: true,
                    on_change: move |value| dispatch.call(RegistrationAction::SetText(TextField::PeopleServed, value)),
                }
            }

            CheckboxField {
                checked: state().form.has_health_permit,
                error: None,
                on_change: move |checked| dispatch.call(RegistrationAction::SetFlag(BoolField::HasHealthPermit, checked)),
                span { "We have a valid health department permit" }
            }

            DocumentUpload { state: state, dispatch: dispatch }

            div {
                class: "org-form-actions",
                button {
                    class: "button outline",
                    onclick: move |_| dispatch.call(RegistrationAction::BackToAccount),
                    "Back to Step 2"
                }
                button {
                    class: "button primary",
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
}
