//! Synchronous field validation for the registration wizard.
//!
//! Field-level messages live in a [`ValidationErrors`] map keyed by the
//! stable field names; the full passes here run on submit attempts while
//! the reducer re-runs the email/phone/confirmation checks on every edit.

use super::types::{RegistrationForm, Role, ValidationErrors};

/// Accepts `local@domain.tld` shapes: exactly one `@`, at least one `.`
/// after it, no whitespace, and no empty segment.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Accepts exactly 10 ASCII digits, nothing else.
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Login page accepts either a valid email or a valid phone number.
pub fn validate_email_or_phone(value: &str) -> bool {
    validate_email(value) || validate_phone(value)
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.set(field, message);
    }
}

/// Full validation pass for the account fields collected at step 2. For
/// travelers and volunteers this gates the final submit directly; for
/// admins it is deferred and runs as part of the step-3 submit instead.
pub fn validate_role_form(role: Role, form: &RegistrationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    require(&mut errors, "firstName", &form.first_name, "First name is required");
    require(&mut errors, "lastName", &form.last_name, "Last name is required");
    // The admin account form collects email instead of a phone number.
    if role == Role::Admin {
        require(&mut errors, "email", &form.email, "Email is required");
    } else {
        require(
            &mut errors,
            "phoneNumber",
            &form.phone_number,
            "Phone number is required",
        );
    }
    require(&mut errors, "password", &form.password, "Password is required");
    require(
        &mut errors,
        "confirmPassword",
        &form.confirm_password,
        "Please confirm your password",
    );

    if role == Role::Volunteer {
        require(&mut errors, "email", &form.email, "Email is required");
        require(
            &mut errors,
            "nationalId",
            &form.national_id,
            "National ID number is required",
        );
        require(
            &mut errors,
            "yearOfBirth",
            &form.year_of_birth,
            "Year of birth is required",
        );
        if !form.accept_terms {
            errors.set("acceptTerms", "You must accept the terms and conditions");
        }
    }

    let phone = form.phone_number.trim();
    if !phone.is_empty() && !validate_phone(phone) {
        errors.set("phoneNumber", "Please enter a valid 10-digit phone number");
    }
    let email = form.email.trim();
    if !email.is_empty() && !validate_email(email) {
        errors.set("email", "Please enter a valid email address");
    }
    if !form.confirm_password.is_empty() && form.password != form.confirm_password {
        errors.set("confirmPassword", "Passwords do not match");
    }

    errors
}

/// Full validation pass for organization verification (admin step 3).
/// At least one uploaded document is required; its absence is a field-level
/// error on `documents`, never a submission failure.
pub fn validate_org_form(form: &RegistrationForm, document_count: usize) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    require(&mut errors, "orgName", &form.org_name, "Organization name is required");
    require(
        &mut errors,
        "orgPhone",
        &form.org_phone,
        "Organization phone is required",
    );
    require(&mut errors, "address", &form.address, "Complete address is required");
    require(&mut errors, "taxId", &form.tax_id, "Tax ID is required");
    require(
        &mut errors,
        "nonProfitId",
        &form.non_profit_id,
        "Non-profit registration number is required",
    );
    require(
        &mut errors,
        "yearEstablished",
        &form.year_established,
        "Year established is required",
    );
    require(
        &mut errors,
        "peopleServed",
        &form.people_served,
        "Monthly people served is required",
    );

    if document_count == 0 {
        errors.set("documents", "Please upload required documents");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_exactly_ten_digits() {
        assert!(validate_phone("0551234567"));
        assert!(validate_phone("0000000000"));

        assert!(!validate_phone("055123456")); // 9 digits
        assert!(!validate_phone("05512345678")); // 11 digits
        assert!(!validate_phone("055123456a"));
        assert!(!validate_phone("055 123456"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn email_accepts_local_at_domain_tld() {
        assert!(validate_email("someone@example.com"));
        assert!(validate_email("a.b+c@mail.example.org"));

        assert!(!validate_email("someone")); // no @
        assert!(!validate_email("someone@example")); // no dot after @
        assert!(!validate_email("someone@@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("someone@.com"));
        assert!(!validate_email("someone@example."));
        assert!(!validate_email("some one@example.com"));
    }

    #[test]
    fn email_or_phone_accepts_either_shape() {
        assert!(validate_email_or_phone("someone@example.com"));
        assert!(validate_email_or_phone("0551234567"));
        assert!(!validate_email_or_phone("neither"));
    }

    fn filled_traveler_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Amina".into(),
            last_name: "Bouzid".into(),
            phone_number: "0551234567".into(),
            password: "correct horse".into(),
            confirm_password: "correct horse".into(),
            ..Default::default()
        }
    }

    #[test]
    fn traveler_missing_first_name_errors_only_on_first_name() {
        let mut form = filled_traveler_form();
        form.first_name.clear();

        let errors = validate_role_form(Role::Traveler, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some("First name is required"));
    }

    #[test]
    fn traveler_does_not_require_email() {
        let errors = validate_role_form(Role::Traveler, &filled_traveler_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn admin_account_requires_email_but_no_phone() {
        let mut form = filled_traveler_form();
        form.phone_number.clear();

        let errors = validate_role_form(Role::Admin, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));

        form.email = "lina@foodbank.org".into();
        assert!(validate_role_form(Role::Admin, &form).is_empty());
    }

    #[test]
    fn volunteer_requires_email_national_id_birth_year_and_terms() {
        let errors = validate_role_form(Role::Volunteer, &filled_traveler_form());
        let missing: Vec<_> = errors.fields().collect();
        assert_eq!(
            missing,
            vec!["acceptTerms", "email", "nationalId", "yearOfBirth"]
        );
    }

    #[test]
    fn mismatched_passwords_fail_the_full_pass() {
        let mut form = filled_traveler_form();
        form.confirm_password = "different".into();
        let errors = validate_role_form(Role::Traveler, &form);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn malformed_phone_overrides_required_message() {
        let mut form = filled_traveler_form();
        form.phone_number = "12345".into();
        let errors = validate_role_form(Role::Traveler, &form);
        assert_eq!(
            errors.get("phoneNumber"),
            Some("Please enter a valid 10-digit phone number")
        );
    }

    fn filled_org_form() -> RegistrationForm {
        RegistrationForm {
            org_name: "Downtown Food Bank".into(),
            org_phone: "0217654321".into(),
            address: "12 Rue des Oliviers".into(),
            tax_id: "TX-4481".into(),
            non_profit_id: "NP-0092".into(),
            year_established: "2011".into(),
            people_served: "350".into(),
            ..Default::default()
        }
    }

    #[test]
    fn org_form_requires_at_least_one_document() {
        let errors = validate_org_form(&filled_org_form(), 0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("documents"), Some("Please upload required documents"));

        let errors = validate_org_form(&filled_org_form(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn org_form_reports_every_missing_field() {
        let errors = validate_org_form(&RegistrationForm::default(), 2);
        for field in [
            "orgName",
            "orgPhone",
            "address",
            "taxId",
            "nonProfitId",
            "yearEstablished",
            "peopleServed",
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert!(!errors.contains("documents"));
    }
}
