//! Brandmark membership subscription client.
//!
//! The footer's "reveal" form posts `{name?, email}` to the subscribe
//! endpoint and expects a success status before routing to the hidden
//! brandmark page. This is the storefront's only network boundary.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Path of the subscribe endpoint, relative to the client's base URL.
pub const SUBSCRIBE_PATH: &str = "/api/brandmark/subscribe";

/// Errors from the membership client.
#[derive(Error, Debug)]
pub enum MembershipError {
    /// Email failed the pre-flight check; no request was sent.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Transport-level failure.
    #[error("Subscribe request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Subscribe rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// JSON body of the subscribe POST. `name` is omitted when absent.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

/// Client for the membership subscribe endpoint.
#[derive(Debug, Clone)]
pub struct MembershipClient {
    http: reqwest::Client,
    base_url: String,
}

impl MembershipClient {
    /// Create a client against a base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Subscribe an email (with optional name) to the brandmark reveal.
    ///
    /// Emails without an `@` are rejected before any I/O, matching the
    /// form's own gate.
    pub async fn subscribe(
        &self,
        name: Option<&str>,
        email: &str,
    ) -> Result<(), MembershipError> {
        if !email.contains('@') {
            return Err(MembershipError::InvalidEmail(email.to_string()));
        }

        let payload = SubscribeRequest {
            name: name.map(str::to_string),
            email: email.to_string(),
        };
        let url = format!("{}{}", self.base_url, SUBSCRIBE_PATH);

        let response = self.http.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "subscribe rejected");
            return Err(MembershipError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(email, "subscribed to brandmark reveal");
        Ok(())
    }
}
