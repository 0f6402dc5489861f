//! Sign-in implementation
//!
//! Performs the single REST sign-in call and extracts the session token
//! from the response body.

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Short-lived session token returned by sign-in
///
/// Valid for one execution; subsequent API calls carry it in the
/// `X-Tableau-Auth` header.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens are short-lived but still credentials; keep them out of
        // Debug-formatted logs.
        write!(f, "SessionToken(***)")
    }
}

/// Sign-in request body for the REST API
#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    credentials: SignInCredentials<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInCredentials<'a> {
    personal_access_token_name: &'a str,
    personal_access_token_secret: &'a str,
    site: Site<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Site<'a> {
    content_url: &'a str,
}

/// Authenticator performs the sign-in exchange
pub struct Authenticator {
    config: ConnectorConfig,
    http_client: Client,
}

impl Authenticator {
    /// Create an authenticator with its own HTTP client
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Create an authenticator sharing an existing HTTP client
    pub fn with_client(config: ConnectorConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Sign in and return a fresh session token
    ///
    /// One POST to the sign-in endpoint; any failure (transport error,
    /// non-2xx status, unparsable body, token path absent) is fatal.
    /// An empty site content URL selects the server's default site.
    pub async fn sign_in(&self) -> Result<SessionToken> {
        let url = self.config.sign_in_url();
        let body = SignInRequest {
            credentials: SignInCredentials {
                personal_access_token_name: self.config.token_name(),
                personal_access_token_secret: self.config.token_secret(),
                site: Site { content_url: "" },
            },
        };

        info!("Signing in to {}", self.config.server());

        let response = self
            .http_client
            .post(&url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::auth(format!("sign-in request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::auth(format!("failed to read sign-in response: {e}")))?;

        if !status.is_success() {
            return Err(Error::auth(format!(
                "sign-in returned HTTP {}: {text}",
                status.as_u16()
            )));
        }

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| Error::auth(format!("sign-in response was not valid JSON: {e}")))?;

        let token = parsed
            .pointer("/credentials/token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::auth("sign-in response missing token at 'credentials.token'")
            })?;

        debug!("Obtained session token ({} chars)", token.len());

        Ok(SessionToken::new(token))
    }
}
