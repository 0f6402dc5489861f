//! Error types for the Tableau lineage connector
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every failure is fatal for the run: nothing here is recovered locally,
//! errors propagate straight to the invoking host.

use thiserror::Error;

/// The main error type for the connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A mandatory environment variable was not set
    #[error("Missing required config variable: {field}")]
    MissingConfigField {
        /// Name of the missing variable
        field: String,
    },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    /// Sign-in failed or the token was absent from the response
    #[error("Authentication failed: {message}")]
    Auth {
        /// What went wrong during sign-in
        message: String,
    },

    // ============================================================================
    // Query / HTTP Errors
    // ============================================================================
    /// Transport-level failure on the query call
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The query call returned a non-2xx status
    #[error("Query failed with HTTP {status}: {body}")]
    QueryStatus {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// A configured endpoint URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Parsing Errors
    // ============================================================================
    /// The response body was not valid JSON
    #[error("Failed to parse response as JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The parsed response did not have the expected nested shape
    #[error("Response missing expected path '{path}': {message}")]
    Schema {
        /// The JSON path that was expected
        path: String,
        /// What was found instead
        message: String,
    },

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// Failure while building the output batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a query status error
    pub fn query_status(status: u16, body: impl Into<String>) -> Self {
        Self::QueryStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a schema error for a missing or malformed response path
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for the connector
pub type Result<T> = std::result::Result<T, Error>;
