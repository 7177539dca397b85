//! Submit gating for the wizard's terminal transitions.

use super::types::{RegistrationState, Role, WizardStep};
use super::validation::{validate_org_form, validate_role_form};
use crate::services::registration_client::{DocumentMeta, RegistrationRequest};

/// Runs the full validation pass for the current step and stores the result
/// in the state. Returns the request payload only when the pass is clean;
/// `None` means the external registration service must not be invoked and
/// the step stays where it is.
///
/// Admins at the role form never submit from there - they continue to the
/// organization verification step instead. Their deferred account fields
/// are enforced here, merged with the organization pass.
pub fn prepare_submit(state: &mut RegistrationState) -> Option<RegistrationRequest> {
    let errors = match state.step {
        WizardStep::RoleSelection | WizardStep::RoleForm(Role::Admin) => return None,
        WizardStep::RoleForm(role) => validate_role_form(role, &state.form),
        WizardStep::OrgVerification => {
            let mut errors = validate_role_form(Role::Admin, &state.form);
            errors.merge(validate_org_form(&state.form, state.attachments.len()));
            errors
        }
    };

    state.errors = errors;
    if !state.errors.is_empty() {
        return None;
    }

    let role = state.step.role()?;
    Some(RegistrationRequest {
        role,
        form: state.form.clone(),
        documents: state
            .attachments
            .iter()
            .map(|file| DocumentMeta {
                name: file.name.clone(),
                size: file.size,
                mime: file.mime.clone(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::attachments::NewAttachment;
    use crate::features::registration::types::{RegistrationAction, TextField};

    fn traveler_state() -> RegistrationState {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SelectRole(Role::Traveler));
        for (field, value) in [
            (TextField::FirstName, "Amina"),
            (TextField::LastName, "Bouzid"),
            (TextField::PhoneNumber, "0551234567"),
            (TextField::Password, "correct horse"),
            (TextField::ConfirmPassword, "correct horse"),
        ] {
            state.reduce_in_place(RegistrationAction::SetText(field, value.into()));
        }
        state
    }

    fn admin_at_verification() -> RegistrationState {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SelectRole(Role::Admin));
        for (field, value) in [
            (TextField::FirstName, "Lina"),
            (TextField::LastName, "Merad"),
            (TextField::Email, "lina@foodbank.org"),
            (TextField::Password, "correct horse"),
            (TextField::ConfirmPassword, "correct horse"),
        ] {
            state.reduce_in_place(RegistrationAction::SetText(field, value.into()));
        }
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        for (field, value) in [
            (TextField::OrgName, "Downtown Food Bank"),
            (TextField::OrgPhone, "0217654321"),
            (TextField::Address, "12 Rue des Oliviers"),
            (TextField::TaxId, "TX-4481"),
            (TextField::NonProfitId, "NP-0092"),
            (TextField::YearEstablished, "2011"),
            (TextField::PeopleServed, "350"),
        ] {
            state.reduce_in_place(RegistrationAction::SetText(field, value.into()));
        }
        state
    }

    #[test]
    fn traveler_submit_blocked_without_first_name() {
        let mut state = traveler_state();
        state.reduce_in_place(RegistrationAction::SetText(TextField::FirstName, "".into()));

        assert!(prepare_submit(&mut state).is_none());
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors.contains("firstName"));
        // The step never moves on a failed pass.
        assert_eq!(state.step, WizardStep::RoleForm(Role::Traveler));
    }

    #[test]
    fn traveler_submit_passes_with_required_fields() {
        let mut state = traveler_state();
        let request = prepare_submit(&mut state).expect("valid traveler form");
        assert_eq!(request.role, Role::Traveler);
        assert!(request.documents.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn admin_role_form_never_submits() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SelectRole(Role::Admin));
        assert!(prepare_submit(&mut state).is_none());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn admin_submit_without_documents_sets_documents_error() {
        let mut state = admin_at_verification();
        assert!(prepare_submit(&mut state).is_none());
        assert_eq!(state.errors.get("documents"), Some("Please upload required documents"));
        assert_eq!(state.step, WizardStep::OrgVerification);
    }

    #[test]
    fn admin_submit_enforces_deferred_account_fields() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SelectRole(Role::Admin));
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        for (field, value) in [
            (TextField::OrgName, "Downtown Food Bank"),
            (TextField::OrgPhone, "0217654321"),
            (TextField::Address, "12 Rue des Oliviers"),
            (TextField::TaxId, "TX-4481"),
            (TextField::NonProfitId, "NP-0092"),
            (TextField::YearEstablished, "2011"),
            (TextField::PeopleServed, "350"),
        ] {
            state.reduce_in_place(RegistrationAction::SetText(field, value.into()));
        }
        state.reduce_in_place(RegistrationAction::AddFiles(vec![NewAttachment {
            name: "permit.pdf".into(),
            size: 2048,
            mime: "application/pdf".into(),
            bytes: vec![1, 2, 3],
        }]));

        // Org fields and a document are not enough: every account field
        // from step 2 is still empty.
        assert!(prepare_submit(&mut state).is_none());
        for field in ["firstName", "lastName", "email", "password", "confirmPassword"] {
            assert!(state.errors.contains(field), "missing error for {field}");
        }
        assert_eq!(state.step, WizardStep::OrgVerification);
    }

    #[test]
    fn admin_submit_with_document_produces_request() {
        let mut state = admin_at_verification();
        state.reduce_in_place(RegistrationAction::AddFiles(vec![NewAttachment {
            name: "permit.pdf".into(),
            size: 2048,
            mime: "application/pdf".into(),
            bytes: vec![1, 2, 3],
        }]));

        let request = prepare_submit(&mut state).expect("valid org form");
        assert_eq!(request.role, Role::Admin);
        assert_eq!(request.documents.len(), 1);
        assert_eq!(request.documents[0].name, "permit.pdf");
        assert_eq!(request.documents[0].size, 2048);
    }
}
