//! # Tableau Lineage Connector
//!
//! A small connector for the Tableau metadata API: sign in with a personal
//! access token, run a fixed GraphQL lineage query, and flatten the nested
//! result (published datasources → downstream flows → owners/projects) into
//! a four-column tabular output for a data-prep host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tableau_lineage::{ConnectorConfig, LineagePipeline, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads API_SERVER, API_TOKEN_NAME, API_SECRET_TOKEN
//!     let config = ConnectorConfig::from_env()?;
//!     let pipeline = LineagePipeline::new(config)?;
//!
//!     let batch = pipeline.run().await?;
//!     println!("{} lineage rows", batch.num_rows());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐    ┌────────────────┐    ┌────────────────┐
//! │ Authenticator │───▶│ Query Executor │───▶│   Flattener    │
//! │   sign_in()   │    │  run(token, q) │    │ flatten(text)  │
//! └───────────────┘    └────────────────┘    └────────────────┘
//!        token             raw response           rows ──▶ Arrow batch
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the connector
pub mod error;

/// Connector configuration loaded from the environment
pub mod config;

/// Sign-in against the Tableau REST API
pub mod auth;

/// Metadata API query execution
pub mod query;

/// Lineage response parsing and flattening
pub mod lineage;

/// Arrow output schema and batch construction
pub mod output;

/// End-to-end pipeline orchestration
pub mod pipeline;

/// Command-line interface
pub mod cli;

pub use config::ConnectorConfig;
pub use error::{Error, Result};
pub use lineage::{flatten, LineageRow};
pub use pipeline::LineagePipeline;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
