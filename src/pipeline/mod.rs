//! Pipeline orchestration
//!
//! Composes the three stages sequentially: sign in, run the fixed lineage
//! query, flatten the response. One invocation per run; the session token
//! obtained here is scoped to that single run and never reused.


use crate::auth::Authenticator;
use crate::config::ConnectorConfig;
use crate::error::Result;
use crate::lineage::{flatten, LineageRow};
use crate::output::rows_to_batch;
use crate::query::{QueryExecutor, LINEAGE_QUERY};
use arrow::record_batch::RecordBatch;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Default request timeout for both API calls
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// End-to-end lineage extraction pipeline
pub struct LineagePipeline {
    authenticator: Authenticator,
    executor: QueryExecutor,
}

impl LineagePipeline {
    /// Create a pipeline from a validated config
    ///
    /// Both stages share one HTTP client built with the crate defaults.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(Self {
            authenticator: Authenticator::with_client(config.clone(), client.clone()),
            executor: QueryExecutor::with_client(config, client),
        })
    }

    /// Sign in only, to validate credentials and connectivity
    pub async fn check(&self) -> Result<()> {
        self.authenticator.sign_in().await?;
        info!("Sign-in succeeded");
        Ok(())
    }

    /// Run the full pipeline and return the flattened rows
    pub async fn fetch_rows(&self) -> Result<Vec<LineageRow>> {
        let token = self.authenticator.sign_in().await?;
        let raw = self.executor.run(&token, LINEAGE_QUERY).await?;
        let rows = flatten(&raw)?;

        info!("Extracted {} lineage rows", rows.len());

        Ok(rows)
    }

    /// Run the full pipeline and return the result as an Arrow batch
    ///
    /// The batch always carries the declared output schema, including when
    /// there are zero rows.
    pub async fn run(&self) -> Result<RecordBatch> {
        let rows = self.fetch_rows().await?;
        rows_to_batch(&rows)
    }
}
