//! Client-credentials token acquisition

use crate::config::EndpointSettings;
use crate::errors::{GraphError, GraphResult};
use crate::network::{GraphRequest, GraphResponse, HttpClient};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error};

/// Bearer token returned by the identity provider
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    /// Lifetime in seconds, as reported by the provider
    pub expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Token endpoint payload; success and failure share one shape
#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    // number on v2.0 endpoints, string on some older ones
    expires_in: Option<serde_json::Value>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Request a token for `scope` using the client-credentials grant
pub async fn acquire_token(
    client: &HttpClient,
    endpoints: &EndpointSettings,
    client_id: &str,
    client_secret: &str,
    tenant_id: &str,
) -> GraphResult<AccessToken> {
    debug!("Getting access token from {}", endpoints.authority(tenant_id));

    let request = GraphRequest::post(endpoints.token_url(tenant_id)).form([
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("scope", endpoints.scope.as_str()),
    ]);

    let response = client.execute(request).await?;
    let token = token_from_response(&response)?;

    debug!("Access token obtained");
    Ok(token)
}

/// Turn a token endpoint response into a token or a `TokenAcquisition` error.
///
/// The body is inspected whatever the status code: the provider reports
/// failures as JSON with `error` / `error_description`.
fn token_from_response(response: &GraphResponse) -> GraphResult<AccessToken> {
    let parsed: TokenResponse = response.json().unwrap_or_default();

    if let Some(secret) = parsed.access_token {
        return Ok(AccessToken {
            secret,
            expires_in: parsed
                .expires_in
                .and_then(|v| v.as_u64().or_else(|| v.as_str()?.parse().ok())),
        });
    }

    let message = match parsed.error_description {
        Some(description) => description,
        None => response.text.clone(),
    };
    error!(
        "Failed to obtain access token (HTTP {}, {}): {}",
        response.status,
        parsed.error.as_deref().unwrap_or("no error code"),
        message
    );

    Err(GraphError::TokenAcquisition { message })
}
