// Core types for the registration wizard - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attachments::{AttachmentList, NewAttachment};
use super::validation;

/// Account roles offered on the role-selection step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Traveler,
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Traveler => "traveler",
            Role::Volunteer => "volunteer",
        }
    }
}

/// Wizard step as a tagged variant so that invalid combinations
/// (e.g. organization verification for a traveler) are unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardStep {
    RoleSelection,
    RoleForm(Role),
    /// Document upload and organization details. Admin only.
    OrgVerification,
}

impl WizardStep {
    pub fn role(&self) -> Option<Role> {
        match self {
            WizardStep::RoleSelection => None,
            WizardStep::RoleForm(role) => Some(*role),
            WizardStep::OrgVerification => Some(Role::Admin),
        }
    }

    /// 1-based step number shown in the UI.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::RoleSelection => 1,
            WizardStep::RoleForm(_) => 2,
            WizardStep::OrgVerification => 3,
        }
    }
}

/// Text inputs of the registration form. `key()` is the stable field name
/// used for the error map and the submission payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextField {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Password,
    ConfirmPassword,
    NationalId,
    YearOfBirth,
    AdditionalInfo,
    OrgName,
    OrgPhone,
    Address,
    TaxId,
    NonProfitId,
    YearEstablished,
    PeopleServed,
}

impl TextField {
    pub fn key(&self) -> &'static str {
        match self {
            TextField::FirstName => "firstName",
            TextField::LastName => "lastName",
            TextField::PhoneNumber => "phoneNumber",
            TextField::Email => "email",
            TextField::Password => "password",
            TextField::ConfirmPassword => "confirmPassword",
            TextField::NationalId => "nationalId",
            TextField::YearOfBirth => "yearOfBirth",
            TextField::AdditionalInfo => "additionalInfo",
            TextField::OrgName => "orgName",
            TextField::OrgPhone => "orgPhone",
            TextField::Address => "address",
            TextField::TaxId => "taxId",
            TextField::NonProfitId => "nonProfitId",
            TextField::YearEstablished => "yearEstablished",
            TextField::PeopleServed => "peopleServed",
        }
    }
}

/// Checkbox inputs of the registration form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoolField {
    AcceptTerms,
    HasHealthPermit,
}

impl BoolField {
    pub fn key(&self) -> &'static str {
        match self {
            BoolField::AcceptTerms => "acceptTerms",
            BoolField::HasHealthPermit => "hasHealthPermit",
        }
    }
}

/// All fields collected across the wizard. Every field starts empty and the
/// whole record is discarded when the wizard unmounts.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub national_id: String,
    pub year_of_birth: String,
    pub additional_info: String,
    pub accept_terms: bool,
    // Organization fields (admin step 3)
    pub org_name: String,
    pub org_phone: String,
    pub address: String,
    pub tax_id: String,
    pub non_profit_id: String,
    pub year_established: String,
    pub people_served: String,
    pub has_health_permit: bool,
}

impl RegistrationForm {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Email => &self.email,
            TextField::Password => &self.password,
            TextField::ConfirmPassword => &self.confirm_password,
            TextField::NationalId => &self.national_id,
            TextField::YearOfBirth => &self.year_of_birth,
            TextField::AdditionalInfo => &self.additional_info,
            TextField::OrgName => &self.org_name,
            TextField::OrgPhone => &self.org_phone,
            TextField::Address => &self.address,
            TextField::TaxId => &self.tax_id,
            TextField::NonProfitId => &self.non_profit_id,
            TextField::YearEstablished => &self.year_established,
            TextField::PeopleServed => &self.people_served,
        }
    }

    fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::FirstName => self.first_name = value,
            TextField::LastName => self.last_name = value,
            TextField::PhoneNumber => self.phone_number = value,
            TextField::Email => self.email = value,
            TextField::Password => self.password = value,
            TextField::ConfirmPassword => self.confirm_password = value,
            TextField::NationalId => self.national_id = value,
            TextField::YearOfBirth => self.year_of_birth = value,
            TextField::AdditionalInfo => self.additional_info = value,
            TextField::OrgName => self.org_name = value,
            TextField::OrgPhone => self.org_phone = value,
            TextField::Address => self.address = value,
            TextField::TaxId => self.tax_id = value,
            TextField::NonProfitId => self.non_profit_id = value,
            TextField::YearEstablished => self.year_established = value,
            TextField::PeopleServed => self.people_served = value,
        }
    }

    fn set_flag(&mut self, field: BoolField, value: bool) {
        match field {
            BoolField::AcceptTerms => self.accept_terms = value,
            BoolField::HasHealthPermit => self.has_health_permit = value,
        }
    }
}

/// Field name -> human-readable message, present only while the field is
/// failing validation.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ValidationErrors {
    entries: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn clear(&mut self, field: &str) {
        self.entries.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Folds another pass's entries in; on overlap the other message wins.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    SelectRole(Role),
    SetText(TextField, String),
    SetFlag(BoolField, bool),
    /// Admin only: RoleForm -> OrgVerification, no validation by design.
    AdvanceToVerification,
    /// OrgVerification -> RoleForm, keeps every entered field and file.
    BackToAccount,
    AddFiles(Vec<NewAttachment>),
    RemoveFile(u64),
    SetDragActive(bool),
    SetErrors(ValidationErrors),
    SetSubmitting(bool),
    SetSubmitError(Option<String>),
    SetSubmitted(bool),
}

/// The whole wizard state, owned by the single active wizard instance.
#[derive(Clone, Default, Debug)]
pub struct RegistrationState {
    pub step: WizardStep,
    pub form: RegistrationForm,
    pub errors: ValidationErrors,
    pub attachments: AttachmentList,
    pub drag_active: bool,
    pub is_submitting: bool,
    pub submit_error: Option<String>,
    pub submitted: bool,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::RoleSelection
    }
}

impl RegistrationState {
    /// Reduces the state based on an action in-place (preserves Dioxus
    /// Signal reactivity).
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SelectRole(role) => {
                if self.step == WizardStep::RoleSelection {
                    self.step = WizardStep::RoleForm(role);
                }
            }
            RegistrationAction::SetText(field, value) => {
                // Editing always clears the field's active error first; it
                // only comes back on the next validation pass.
                self.errors.clear(field.key());
                self.form.set_text(field, value);
                self.apply_live_validation(field);
            }
            RegistrationAction::SetFlag(field, value) => {
                self.errors.clear(field.key());
                self.form.set_flag(field, value);
            }
            RegistrationAction::AdvanceToVerification => {
                // Step-2 admin fields are intentionally not validated here;
                // see the deferred-validation note in DESIGN.md.
                if self.step == WizardStep::RoleForm(Role::Admin) {
                    self.step = WizardStep::OrgVerification;
                }
            }
            RegistrationAction::BackToAccount => {
                if self.step == WizardStep::OrgVerification {
                    self.step = WizardStep::RoleForm(Role::Admin);
                }
            }
            RegistrationAction::AddFiles(files) => {
                self.attachments.add_files(files);
                self.errors.clear("documents");
            }
            RegistrationAction::RemoveFile(id) => {
                self.attachments.remove(id);
            }
            RegistrationAction::SetDragActive(active) => {
                self.drag_active = active;
            }
            RegistrationAction::SetErrors(errors) => {
                self.errors = errors;
            }
            RegistrationAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
            }
            RegistrationAction::SetSubmitError(error) => {
                self.submit_error = error;
            }
            RegistrationAction::SetSubmitted(submitted) => {
                self.submitted = submitted;
            }
        }
    }

    /// Checks that run on every keystroke rather than waiting for submit:
    /// email shape, phone shape, and password confirmation.
    fn apply_live_validation(&mut self, field: TextField) {
        match field {
            TextField::Email => {
                let email = self.form.email.trim();
                if !email.is_empty() && !validation::validate_email(email) {
                    self.errors
                        .set("email", "Please enter a valid email address");
                }
            }
            TextField::PhoneNumber => {
                let phone = self.form.phone_number.trim();
                if !phone.is_empty() && !validation::validate_phone(phone) {
                    self.errors
                        .set("phoneNumber", "Please enter a valid 10-digit phone number");
                }
            }
            TextField::Password | TextField::ConfirmPassword => {
                // Only meaningful once the counterpart field has content.
                if !self.form.confirm_password.is_empty() {
                    if self.form.password != self.form.confirm_password {
                        self.errors.set("confirmPassword", "Passwords do not match");
                    } else {
                        self.errors.clear("confirmPassword");
                    }
                }
            }
            _ => {}
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.step.role()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(role: Role) -> RegistrationState {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SelectRole(role));
        state
    }

    #[test]
    fn role_selection_advances_to_role_form() {
        let state = select(Role::Traveler);
        assert_eq!(state.step, WizardStep::RoleForm(Role::Traveler));
        assert_eq!(state.step.number(), 2);
        assert_eq!(state.role(), Some(Role::Traveler));
    }

    #[test]
    fn role_selection_step_has_no_role() {
        let state = RegistrationState::default();
        assert_eq!(state.step, WizardStep::RoleSelection);
        assert_eq!(state.role(), None);
    }

    #[test]
    fn advance_to_verification_is_admin_only() {
        let mut state = select(Role::Volunteer);
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        assert_eq!(state.step, WizardStep::RoleForm(Role::Volunteer));

        let mut state = select(Role::Admin);
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        assert_eq!(state.step, WizardStep::OrgVerification);
        assert_eq!(state.role(), Some(Role::Admin));
    }

    #[test]
    fn back_transition_preserves_fields_and_files() {
        let mut state = select(Role::Admin);
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::FirstName,
            "Amina".into(),
        ));
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::OrgName,
            "Food Bank".into(),
        ));
        state.reduce_in_place(RegistrationAction::AddFiles(vec![NewAttachment {
            name: "permit.pdf".into(),
            size: 4096,
            mime: "application/pdf".into(),
            bytes: vec![0u8; 16],
        }]));

        state.reduce_in_place(RegistrationAction::BackToAccount);
        assert_eq!(state.step, WizardStep::RoleForm(Role::Admin));
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);

        assert_eq!(state.form.first_name, "Amina");
        assert_eq!(state.form.org_name, "Food Bank");
        assert_eq!(state.attachments.len(), 1);
    }

    #[test]
    fn editing_a_field_clears_its_error_immediately() {
        let mut state = select(Role::Traveler);
        let mut errors = ValidationErrors::default();
        errors.set("firstName", "First name is required");
        state.reduce_in_place(RegistrationAction::SetErrors(errors));
        assert!(state.errors.contains("firstName"));

        // Clears even though a single letter is hardly a "valid" name yet.
        state.reduce_in_place(RegistrationAction::SetText(TextField::FirstName, "A".into()));
        assert!(!state.errors.contains("firstName"));
    }

    #[test]
    fn email_error_reappears_on_live_validation() {
        let mut state = select(Role::Volunteer);
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::Email,
            "not-an-email".into(),
        ));
        assert!(state.errors.contains("email"));

        state.reduce_in_place(RegistrationAction::SetText(
            TextField::Email,
            "someone@example.com".into(),
        ));
        assert!(!state.errors.contains("email"));
    }

    #[test]
    fn password_confirmation_revalidates_on_either_edit() {
        let mut state = select(Role::Traveler);
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::Password,
            "hunter22".into(),
        ));
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::ConfirmPassword,
            "hunter2".into(),
        ));
        assert_eq!(state.field_error("confirmPassword"), Some("Passwords do not match"));

        // Fixing the *password* side must clear the confirm error too.
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::Password,
            "hunter2".into(),
        ));
        assert!(!state.errors.contains("confirmPassword"));
    }

    #[test]
    fn adding_files_clears_the_documents_error() {
        let mut state = select(Role::Admin);
        state.reduce_in_place(RegistrationAction::AdvanceToVerification);
        let mut errors = ValidationErrors::default();
        errors.set("documents", "Please upload required documents");
        state.reduce_in_place(RegistrationAction::SetErrors(errors));

        state.reduce_in_place(RegistrationAction::AddFiles(vec![NewAttachment {
            name: "tax.pdf".into(),
            size: 100,
            mime: "application/pdf".into(),
            bytes: Vec::new(),
        }]));
        assert!(!state.errors.contains("documents"));
    }

    #[test]
    fn submit_failure_keeps_entered_data() {
        let mut state = select(Role::Traveler);
        state.reduce_in_place(RegistrationAction::SetText(
            TextField::FirstName,
            "Karim".into(),
        ));
        state.reduce_in_place(RegistrationAction::SetSubmitError(Some(
            "Failed to register. Please try again.".into(),
        )));
        assert_eq!(state.form.first_name, "Karim");
        assert_eq!(
            state.submit_error.as_deref(),
            Some("Failed to register. Please try again.")
        );
    }
}
