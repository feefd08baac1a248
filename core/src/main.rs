use std::fmt::Debug;
use std::sync::Arc;

use anyhow::Context;
use crypto_net::{ClientConfig, CreatePost, Dispatcher, ListCryptos, Outcome, PostPayload};
use tracing_subscriber::EnvFilter;

fn report<T: Debug>(label: &str, outcome: Outcome<T>) {
    match outcome {
        Ok(value) => println!("{label}: Success({value:?})"),
        Err(err) => println!("{label}: Failure({err})"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crypto_net=info")),
        )
        .init();

    let config = ClientConfig::default_host().context("base URL is misconfigured")?;
    let dispatcher = Arc::new(Dispatcher::new(config)?);

    let cryptos = dispatcher.spawn(ListCryptos, |outcome| report("cryptos", outcome));

    let post = PostPayload {
        name: "Tony Trejo".to_string(),
        text: "New post!!!".to_string(),
    };
    let created = dispatcher.spawn(CreatePost::new(post), |outcome| report("createpost", outcome));

    let (cryptos, created) = tokio::join!(cryptos, created);
    cryptos?;
    created?;
    Ok(())
}
