//! Domain DTOs for the crypto API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently so the
//! client never depends on Axum. Integration tests catch drift between the two.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single quote from the `cryptos` listing. Both fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
}

/// Payload submitted to `createpost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub name: String,
    pub text: String,
}

/// Reply to `createpost`: a bare JSON object of string pairs, not nested
/// under any key. Which keys appear is up to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostResponse {
    pub status: BTreeMap<String, String>,
}
