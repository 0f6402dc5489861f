//! Authentication against the Tableau REST API
//!
//! One sign-in call per run: personal-access-token credentials are exchanged
//! for a short-lived session token. No caching and no refresh; the token
//! lives exactly as long as the query that uses it.

mod authenticator;

#[cfg(test)]
mod tests;

pub use authenticator::{Authenticator, SessionToken};
