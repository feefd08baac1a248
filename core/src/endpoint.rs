//! The endpoint descriptor.
//!
//! # Design
//! An endpoint supplies only what differs between calls: method, path
//! segment and (for writes) a body. Request construction and JSON decoding
//! have default implementations driven by the shared `ClientConfig`, so a
//! typical endpoint is a handful of lines.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Path segments served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointPath {
    Cryptos,
    CreatePost,
}

impl EndpointPath {
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointPath::Cryptos => "cryptos",
            EndpointPath::CreatePost => "createpost",
        }
    }
}

/// Describes how to build one request and decode its response.
pub trait Endpoint {
    /// Value produced by a successful exchange.
    type Output: DeserializeOwned;

    fn method(&self) -> HttpMethod;

    fn path(&self) -> EndpointPath;

    /// Encoded request body. Endpoints without a payload keep the default.
    fn body(&self) -> Result<Option<Vec<u8>>, ApiError> {
        Ok(None)
    }

    /// Absolute request for this endpoint under `config`'s base URL.
    ///
    /// Fails only when the body cannot be encoded; nothing is sent in that
    /// case.
    fn build_request(&self, config: &ClientConfig) -> Result<HttpRequest, ApiError> {
        let body = self.body()?;
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        Ok(HttpRequest {
            method: self.method(),
            url: config.endpoint_url(self.path().as_str()),
            headers,
            body,
        })
    }

    /// Decode a raw response body. The whole value decodes or nothing does.
    fn decode(&self, body: &[u8]) -> Result<Self::Output, ApiError> {
        serde_json::from_slice(body).map_err(ApiError::Decoding)
    }
}

/// Serialize `payload` as a JSON request body.
pub fn json_body<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(payload).map_err(ApiError::Encoding)
}
