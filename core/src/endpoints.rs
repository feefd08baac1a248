//! Concrete endpoints of the crypto API.

use crate::endpoint::{json_body, Endpoint, EndpointPath};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::types::{PostPayload, PostResponse, Quote};

/// `GET {base}/cryptos`: the current list of quotes, in server order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCryptos;

impl Endpoint for ListCryptos {
    type Output = Vec<Quote>;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> EndpointPath {
        EndpointPath::Cryptos
    }
}

/// `POST {base}/createpost` with a JSON-encoded `PostPayload`.
#[derive(Debug, Clone)]
pub struct CreatePost {
    post: PostPayload,
}

impl CreatePost {
    pub fn new(post: PostPayload) -> Self {
        Self { post }
    }

    pub fn post(&self) -> &PostPayload {
        &self.post
    }
}

impl Endpoint for CreatePost {
    type Output = PostResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> EndpointPath {
        EndpointPath::CreatePost
    }

    fn body(&self) -> Result<Option<Vec<u8>>, ApiError> {
        json_body(&self.post).map(Some)
    }
}
