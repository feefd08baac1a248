use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crypto {
    pub symbol: String,
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostData {
    pub name: String,
    pub text: String,
}

/// What `GET /cryptos` answers with.
#[derive(Clone, Debug)]
pub enum CryptosReply {
    Quotes(Vec<Crypto>),
    /// Served verbatim as `application/json`, so tests can send malformed or
    /// empty bodies.
    Raw(String),
}

/// Canned data served by the mock backend.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub cryptos: CryptosReply,
    /// Base of every `POST /createpost` reply. The posted `name` and `text`
    /// are echoed back alongside these entries.
    pub post_status: BTreeMap<String, String>,
}

impl Fixture {
    pub fn with_quotes(quotes: Vec<Crypto>) -> Self {
        Self {
            cryptos: CryptosReply::Quotes(quotes),
            ..Self::default()
        }
    }

    pub fn with_raw_cryptos(body: impl Into<String>) -> Self {
        Self {
            cryptos: CryptosReply::Raw(body.into()),
            ..Self::default()
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            cryptos: CryptosReply::Quotes(sample_cryptos()),
            post_status: BTreeMap::from([("status".to_string(), "created".to_string())]),
        }
    }
}

pub fn sample_cryptos() -> Vec<Crypto> {
    [
        ("XRP", 0.51712048871858),
        ("WOZX", 2.86325750658067),
        ("BTC", 19190.426010045157),
        ("BTCV", 66.61105369058797),
        ("ALLBI", 0.00495452304336),
        ("DF", 0.22036849849893),
        ("ETH", 591.4187273438921),
        ("TRX", 0.02937642050303),
        ("LBC", 0.07171163356022),
        ("ADA", 0.15430348473841),
    ]
    .into_iter()
    .map(|(symbol, price)| Crypto {
        symbol: symbol.to_string(),
        price,
    })
    .collect()
}

pub fn app() -> Router {
    app_with(Fixture::default())
}

pub fn app_with(fixture: Fixture) -> Router {
    Router::new()
        .route("/cryptos", get(list_cryptos))
        .route("/createpost", post(create_post))
        .with_state(Arc::new(fixture))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Fixture::default()).await
}

pub async fn run_with(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixture)).await
}

async fn list_cryptos(State(fixture): State<Arc<Fixture>>) -> Response {
    match &fixture.cryptos {
        CryptosReply::Quotes(quotes) => Json(quotes.clone()).into_response(),
        CryptosReply::Raw(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
    }
}

async fn create_post(
    State(fixture): State<Arc<Fixture>>,
    Json(input): Json<PostData>,
) -> Json<BTreeMap<String, String>> {
    let mut reply = fixture.post_status.clone();
    reply.insert("name".to_string(), input.name);
    reply.insert("text".to_string(), input.text);
    Json(reply)
}
