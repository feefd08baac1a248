//! Generic request dispatch.
//!
//! # Design
//! `Dispatcher` pairs the shared `ClientConfig` with a `Transport` and runs
//! one exchange per call. `execute` has a single exit point, so every path
//! (encoding failure, transport failure, empty body, decode result) settles
//! exactly one `Outcome`. `spawn` is the completion-handler form: the callback
//! runs exactly once with that same outcome.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ConfigError, Outcome};
use crate::transport::{HttpTransport, Transport};

pub struct Dispatcher<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl Dispatcher<HttpTransport> {
    /// Dispatcher using a reqwest client built from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one exchange with `endpoint` and decode its response.
    #[tracing::instrument(skip_all, fields(method = tracing::field::Empty, url = tracing::field::Empty))]
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Outcome<E::Output> {
        let outcome = self.exchange(endpoint).await;
        match &outcome {
            Ok(_) => debug!("request succeeded"),
            Err(err) => warn!(error = %err, "request failed"),
        }
        outcome
    }

    async fn exchange<E: Endpoint>(&self, endpoint: &E) -> Outcome<E::Output> {
        let request = endpoint.build_request(&self.config)?;
        tracing::Span::current()
            .record("method", request.method.as_str())
            .record("url", request.url.as_str());

        let response = self.transport.send(request).await?;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        if response.body.is_empty() {
            return Err(ApiError::Transport("response carried no body".to_string()));
        }

        endpoint.decode(&response.body)
    }

    /// Run `endpoint` on the tokio runtime and hand its outcome to
    /// `on_complete`, which is invoked exactly once.
    pub fn spawn<E, F>(self: &Arc<Self>, endpoint: E, on_complete: F) -> JoinHandle<()>
    where
        T: 'static,
        E: Endpoint + Send + Sync + 'static,
        E::Output: Send,
        F: FnOnce(Outcome<E::Output>) + Send + 'static,
    {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = dispatcher.execute(&endpoint).await;
            on_complete(outcome);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::endpoint::{json_body, EndpointPath};
    use crate::endpoints::{CreatePost, ListCryptos};
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::types::{PostPayload, Quote};

    /// Transport that answers every request with a fixed body, or fails when
    /// the body is `None`.
    struct Canned {
        body: Option<&'static str>,
        calls: AtomicUsize,
        last_request: Mutex<Option<HttpRequest>>,
    }

    impl Canned {
        fn new(body: Option<&'static str>) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            match self.body {
                Some(body) => Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: body.as_bytes().to_vec(),
                }),
                None => Err(ApiError::Transport("connection reset by peer".to_string())),
            }
        }
    }

    fn dispatcher(body: Option<&'static str>) -> Dispatcher<Canned> {
        let config = ClientConfig::new("https://example.test").unwrap();
        Dispatcher::with_transport(config, Canned::new(body))
    }

    #[tokio::test]
    async fn list_cryptos_success() {
        let d = dispatcher(Some(r#"[{"symbol":"XRP","price":0.5171}]"#));
        let quotes = d.execute(&ListCryptos).await.unwrap();
        assert_eq!(
            quotes,
            vec![Quote {
                symbol: "XRP".to_string(),
                price: 0.5171
            }]
        );

        let req = d.transport.last_request.lock().unwrap().take().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url.as_str(), "https://example.test/cryptos");
    }

    #[tokio::test]
    async fn missing_price_fails_whole_list() {
        let d = dispatcher(Some(r#"[{"symbol":"BTC","price":19190.42},{"symbol":"XRP"}]"#));
        let err = d.execute(&ListCryptos).await.unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let d = dispatcher(None);
        let err = d.execute(&ListCryptos).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn empty_body_is_a_transport_error() {
        let d = dispatcher(Some(""));
        let post = PostPayload {
            name: "a".to_string(),
            text: "b".to_string(),
        };
        let err = d.execute(&CreatePost::new(post)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn create_post_sends_json_body() {
        let d = dispatcher(Some(r#"{"status":"ok"}"#));
        let post = PostPayload {
            name: "Tony Trejo".to_string(),
            text: "New post!!!".to_string(),
        };
        let response = d.execute(&CreatePost::new(post)).await.unwrap();
        assert_eq!(response.status["status"], "ok");

        let req = d.transport.last_request.lock().unwrap().take().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url.as_str(), "https://example.test/createpost");
        let body: serde_json::Value = serde_json::from_slice(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Tony Trejo", "text": "New post!!!"}));
    }

    struct Unencodable;

    impl Endpoint for Unencodable {
        type Output = serde_json::Value;

        fn method(&self) -> HttpMethod {
            HttpMethod::Post
        }

        fn path(&self) -> EndpointPath {
            EndpointPath::CreatePost
        }

        fn body(&self) -> Result<Option<Vec<u8>>, ApiError> {
            let mut payload = std::collections::HashMap::new();
            payload.insert(vec![1u8], "not a string key");
            json_body(&payload).map(Some)
        }
    }

    #[tokio::test]
    async fn encoding_failure_skips_the_network() {
        let d = dispatcher(Some(r#"{"status":"ok"}"#));
        let err = d.execute(&Unencodable).await.unwrap_err();
        assert!(matches!(err, ApiError::Encoding(_)));
        assert_eq!(d.transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn spawn_notifies_exactly_once() {
        let d = Arc::new(dispatcher(None));
        let notified = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = tokio::sync::oneshot::channel();

        let counter = Arc::clone(&notified);
        d.spawn(ListCryptos, move |outcome| {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(outcome);
        })
        .await
        .unwrap();

        let outcome = rx.await.unwrap();
        assert!(matches!(outcome, Err(ApiError::Transport(_))));
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
