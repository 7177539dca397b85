use dioxus::prelude::*;

use crate::components::forms::{
    AdminAccountForm, OrgVerificationForm, RoleSelector, TravelerForm, VolunteerForm,
};
use crate::components::layout::{AuthTab, AuthTabs};
use crate::features::registration::{
    prepare_submit, RegistrationAction, RegistrationState, Role, WizardStep,
};
use crate::services::registration_client::submit_registration;

/// The registration wizard page. Owns the single wizard state signal and the
/// dispatch handler; the step components below it are pure views over that
/// state.
#[component]
pub fn Register() -> Element {
    let mut state = use_signal(RegistrationState::default);
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let on_submit = EventHandler::new(move |_: ()| {
        if state().is_submitting {
            return;
        }
        let request = state.with_mut(prepare_submit);
        let Some(request) = request else {
            return;
        };

        dispatch.call(RegistrationAction::SetSubmitting(true));
        dispatch.call(RegistrationAction::SetSubmitError(None));
        spawn(async move {
            match submit_registration(request).await {
                Ok(response) if response.success => {
                    crate::console_info!("[Register] {}", response.message);
                    dispatch.call(RegistrationAction::SetSubmitted(true));
                }
                Ok(response) => {
                    dispatch.call(RegistrationAction::SetSubmitError(Some(response.message)));
                }
                Err(e) => {
                    crate::console_error!("[Register] Submission failed: {}", e);
                    dispatch.call(RegistrationAction::SetSubmitError(Some(
                        "Failed to register. Please try again.".to_string(),
                    )));
                }
            }
            dispatch.call(RegistrationAction::SetSubmitting(false));
        });
    });

    if state().submitted {
        return rsx! {
            div {
                class: "auth-page",
                div {
                    class: "auth-panel success-panel",
                    div { class: "success-icon", "✓" }
                    h2 { class: "form-title", "Registration Submitted" }
                    p {
                        class: "form-subtitle",
                        "Thank you for joining Tweeza. You can now log in with your \
                         new account."
                    }
                    a { class: "button primary", href: "/login", "Go to Login" }
                }
            }
        };
    }

    let step = state().step;
    let total_steps = match step.role() {
        Some(Role::Admin) => 3,
        _ => 2,
    };
    let heading = match step {
        WizardStep::RoleSelection => "Choose your role",
        WizardStep::RoleForm(Role::Admin) => "Create your admin account",
        WizardStep::RoleForm(Role::Traveler) => "Create your traveler account",
        WizardStep::RoleForm(Role::Volunteer) => "Create your volunteer account",
        WizardStep::OrgVerification => "Verify your organization",
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-panel",
                AuthTabs { active: AuthTab::Register }

                div {
                    class: "wizard-header",
                    h1 { class: "form-title", "{heading}" }
                    span { class: "wizard-step-count", "Step {step.number()} of {total_steps}" }
                }

                if let Some(message) = state().submit_error {
                    p { class: "banner-error", "{message}" }
                }

                {match step {
                    WizardStep::RoleSelection => rsx! {
                        RoleSelector { dispatch: dispatch }
                    },
                    WizardStep::RoleForm(Role::Traveler) => rsx! {
                        TravelerForm { state: state, dispatch: dispatch, on_submit: on_submit }
                    },
                    WizardStep::RoleForm(Role::Volunteer) => rsx! {
                        VolunteerForm { state: state, dispatch: dispatch, on_submit: on_submit }
                    },
                    WizardStep::RoleForm(Role::Admin) => rsx! {
                        AdminAccountForm { state: state, dispatch: dispatch }
                    },
                    WizardStep::OrgVerification => rsx! {
                        OrgVerificationForm { state: state, dispatch: dispatch, on_submit: on_submit }
                    },
                }}
            }
        }
    }
}
