//! Query executor implementation

use crate::auth::SessionToken;
use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

/// Header carrying the session token on metadata API calls
const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Executes GraphQL queries against the metadata endpoint
pub struct QueryExecutor {
    config: ConnectorConfig,
    http_client: Client,
}

impl QueryExecutor {
    /// Create an executor with its own HTTP client
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Create an executor sharing an existing HTTP client
    pub fn with_client(config: ConnectorConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Run a query and return the raw response body
    ///
    /// One POST with the query in a JSON envelope and the session token in
    /// the auth header. Fails with a query error on transport failure or a
    /// non-2xx status; the body is returned untouched otherwise.
    pub async fn run(&self, token: &SessionToken, query: &str) -> Result<String> {
        let url = self.config.metadata_url();

        info!("Running metadata query against {}", self.config.server());
        debug!("Query text:\n{query}");

        let response = self
            .http_client
            .post(&url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .header(AUTH_HEADER, token.as_str())
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        let text = response.text().await.map_err(Error::Http)?;

        if !status.is_success() {
            return Err(Error::query_status(status.as_u16(), text));
        }

        debug!("Raw metadata response: {text}");

        Ok(text)
    }
}
