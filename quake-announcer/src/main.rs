//! Quake Announcer Lambda - Tells Alexa about the latest felt earthquake in New Zealand.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::{announce_latest, AlexaResponse, Config, FeedClient};
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Application state, built once per cold start.
struct AppState {
    feed_client: FeedClient,
}

impl AppState {
    fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        Ok(Self {
            feed_client: FeedClient::new(reqwest::Client::new(), config),
        })
    }
}

/// The Alexa request is accepted as-is; its contents do not affect the answer.
async fn handler(state: Arc<AppState>, event: LambdaEvent<Value>) -> Result<AlexaResponse, Error> {
    let request_type = event
        .payload
        .pointer("/request/type")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    debug!("Received Alexa {} (request id {})", request_type, event.context.request_id);

    match announce_latest(&state.feed_client).await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Failed to announce latest quake: {}", e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
