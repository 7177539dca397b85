//! Mock client for the registration service boundary.
//!
//! There is no backend: submissions are logged to the console and resolved
//! after a short simulated delay so the UI exercises the same in-flight and
//! failure paths a real client would have.

use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::registration::{RegistrationForm, Role};

/// Simulated round-trip latency, milliseconds.
const MOCK_LATENCY_MS: u32 = 900;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to encode request: {0}")]
    Encoding(String),
    #[error("registration service unavailable")]
    Unavailable,
}

/// Metadata for an uploaded document; the bytes stay with the wizard.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub role: Role,
    pub form: RegistrationForm,
    pub documents: Vec<DocumentMeta>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
}

impl RegistrationResponse {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Invoked exactly once per successful validation pass at a terminal step.
pub async fn submit_registration(
    request: RegistrationRequest,
) -> Result<RegistrationResponse, ServiceError> {
    let payload =
        serde_json::to_string(&request).map_err(|e| ServiceError::Encoding(e.to_string()))?;
    crate::console_info!(
        "[Registration] Submitting as {} with {} document(s): {}",
        request.role.as_str(),
        request.documents.len(),
        payload
    );

    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    Ok(RegistrationResponse::success(
        "Registration received - our team will review your details",
    ))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

pub async fn submit_login(request: LoginRequest) -> Result<RegistrationResponse, ServiceError> {
    crate::console_info!("[Login] Attempting login for {}", request.identifier);
    TimeoutFuture::new(MOCK_LATENCY_MS).await;
    Ok(RegistrationResponse::success("Login successful"))
}
