//! Connector configuration
//!
//! The connector reads three mandatory values from the environment:
//! the Tableau server host plus the personal-access-token name and secret.
//! They are collected into a [`ConnectorConfig`] once at startup and
//! validated before any network call is made, so a missing variable fails
//! fast instead of surfacing mid-pipeline.

use crate::error::{Error, Result};
use std::env;
use std::fmt;
use url::Url;

/// Environment variable holding the Tableau server host
pub const ENV_SERVER: &str = "API_SERVER";

/// Environment variable holding the personal-access-token name
pub const ENV_TOKEN_NAME: &str = "API_TOKEN_NAME";

/// Environment variable holding the personal-access-token secret
pub const ENV_TOKEN_SECRET: &str = "API_SECRET_TOKEN";

/// REST API sign-in path (API version pinned by the upstream contract)
const SIGN_IN_PATH: &str = "/api/3.9/auth/signin";

/// Metadata API GraphQL endpoint path
const METADATA_PATH: &str = "/api/metadata/graphql";

/// Validated connector configuration
///
/// Immutable for the lifetime of the process. The token secret is held in
/// memory but redacted from `Debug` output.
#[derive(Clone)]
pub struct ConnectorConfig {
    /// Tableau server host, e.g. `tableau.example.com`
    server: String,
    /// Personal-access-token name
    token_name: String,
    /// Personal-access-token secret
    token_secret: String,
}

impl ConnectorConfig {
    /// Create a config from explicit values, validating that none are empty
    pub fn new(
        server: impl Into<String>,
        token_name: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            server: server.into(),
            token_name: token_name.into(),
            token_secret: token_secret.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the config from the process environment
    ///
    /// All three variables are mandatory; the first missing one aborts with
    /// `MissingConfigField` before any network call.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load the config through a lookup function (injectable for tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).ok_or_else(|| Error::missing_field(name));

        Self::new(get(ENV_SERVER)?, get(ENV_TOKEN_NAME)?, get(ENV_TOKEN_SECRET)?)
    }

    fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            return Err(Error::config("server host must not be empty"));
        }
        if self.token_name.trim().is_empty() {
            return Err(Error::config("token name must not be empty"));
        }
        if self.token_secret.is_empty() {
            return Err(Error::config("token secret must not be empty"));
        }
        // Fail fast on an unusable host instead of surfacing mid-pipeline.
        Url::parse(&self.base_url())?;
        Ok(())
    }

    /// The configured server host
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The personal-access-token name
    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    /// The personal-access-token secret
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    /// Base URL for the server
    ///
    /// A host with an explicit `http://`/`https://` scheme is used as-is
    /// (mock servers in tests), otherwise `https://` is assumed.
    pub fn base_url(&self) -> String {
        if self.server.starts_with("http://") || self.server.starts_with("https://") {
            self.server.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.server.trim_end_matches('/'))
        }
    }

    /// Full URL of the REST sign-in endpoint
    pub fn sign_in_url(&self) -> String {
        format!("{}{SIGN_IN_PATH}", self.base_url())
    }

    /// Full URL of the metadata GraphQL endpoint
    pub fn metadata_url(&self) -> String {
        format!("{}{METADATA_PATH}", self.base_url())
    }
}

impl fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("server", &self.server)
            .field("token_name", &self.token_name)
            .field("token_secret", &"***")
            .finish()
    }
}
