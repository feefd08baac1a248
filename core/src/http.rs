//! HTTP exchange types described as plain data.
//!
//! # Design
//! Endpoints build an `HttpRequest` and decode the body of an `HttpResponse`
//! without touching the network. A `Transport` executes the actual I/O, which
//! keeps request construction and decoding deterministic and easy to test.

use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully formed request: absolute URL, method, headers and optional body.
///
/// Built by `Endpoint::build_request` and consumed by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// A raw response as returned by a `Transport`.
///
/// The status is carried for logging only; decoding looks at the body alone.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}
