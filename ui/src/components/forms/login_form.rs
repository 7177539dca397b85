use dioxus::prelude::*;

use crate::components::inputs::{FieldInput, InputType};
use crate::features::registration::validation::validate_email_or_phone;
use crate::services::registration_client::{submit_login, LoginRequest};

/// Login with an email-or-phone identifier. Validation runs live on the
/// identifier; submission goes through the mock service with a simulated
/// delay, surfacing failures as a single banner message.
#[component]
pub fn LoginForm() -> Element {
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut identifier_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    let validate_identifier = |value: &str| -> Option<String> {
        if value.is_empty() {
            Some("This field is required".to_string())
        } else if !validate_email_or_phone(value) {
            Some("Please enter a valid email or phone number".to_string())
        } else {
            None
        }
    };

    rsx! {
        div {
            class: "login-form",
            FieldInput {
                label: "Email/Phone".to_string(),
                value: identifier(),
                placeholder: "Enter your email or phone".to_string(),
                input_type: InputType::Text,
                error: identifier_error(),
                disabled: is_loading(),
                on_change: move |value: String| {
                    identifier_error.set(validate_identifier(&value));
                    identifier.set(value);
                }
            }
            FieldInput {
                label: "Password".to_string(),
                value: password(),
                placeholder: "Enter your password".to_string(),
                input_type: InputType::Password,
                error: password_error(),
                disabled: is_loading(),
                on_change: move |value: String| {
                    password_error.set(None);
                    password.set(value);
                }
            }

            div {
                class: "login-links",
                a { class: "auth-link", href: "/forgot-password", "Forgot Password?" }
            }

            if let Some(message) = submit_error() {
                p { class: "banner-error", "{message}" }
            }

            button {
                class: "button primary full-width",
                disabled: is_loading(),
                onclick: move |_| {
                    let id_error = validate_identifier(identifier().trim());
                    let pw_error = if password().is_empty() {
                        Some("Password is required".to_string())
                    } else {
                        None
                    };
                    let blocked = id_error.is_some() || pw_error.is_some();
                    identifier_error.set(id_error);
                    password_error.set(pw_error);
                    if blocked {
                        return;
                    }

                    is_loading.set(true);
                    submit_error.set(None);
                    let request = LoginRequest {
                        identifier: identifier().trim().to_string(),
                        password: password(),
                    };
                    spawn(async move {
                        match submit_login(request).await {
                            Ok(response) if response.success => {
                                crate::console_info!("[Login] {}", response.message);
                            }
                            Ok(response) => {
                                submit_error.set(Some(response.message));
                            }
                            Err(e) => {
                                crate::console_error!("[Login] {}", e);
                                submit_error.set(Some("Failed to login. Please try again.".to_string()));
                            }
                        }
                        is_loading.set(false);
                    });
                },
                if is_loading() { "Logging in..." } else { "Login" }
            }
        }
    }
}
