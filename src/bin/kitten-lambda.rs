use std::sync::Arc;

use kitten_store::config::{self, Config};
use kitten_store::store;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    config.log_startup();

    let operation = config::operation_from_env()?;
    tracing::info!("Serving kitten operation: {}", operation.as_str());

    // One client per execution environment, reused across invocations
    let store = store::from_config(&config).await?;

    // Events are decoded by the operation so a malformed one still gets a response
    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let store = Arc::clone(&store);
        async move { Ok::<_, Error>(operation.invoke_event(store.as_ref(), event.payload).await) }
    }))
    .await
}
