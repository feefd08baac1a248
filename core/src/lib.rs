//! Async endpoint client for the crypto quotes API.
//!
//! # Overview
//! An `Endpoint` describes how to build one request and decode its response.
//! A `Dispatcher` runs that exchange over a `Transport` and settles a single
//! `Outcome`. Two endpoints ship with the crate: `ListCryptos` and
//! `CreatePost`.
//!
//! # Design
//! - `ClientConfig` holds the shared defaults (base URL, user agent, timeout);
//!   endpoints only supply method, path and body.
//! - Endpoints never touch the network. `HttpTransport` does, via reqwest.
//! - Errors are one of three kinds: transport, encoding, decoding.

pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use dispatcher::Dispatcher;
pub use endpoint::{json_body, Endpoint, EndpointPath};
pub use endpoints::{CreatePost, ListCryptos};
pub use error::{ApiError, ConfigError, Outcome};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, Transport};
pub use types::{PostPayload, PostResponse, Quote};
