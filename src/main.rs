use anyhow::Context;
use kitten_store::config::Config;
use kitten_store::state::AppState;
use kitten_store::{routes, store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("kitten-store starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config).await?;
    let addr = format!("{}:{}", config.service_host, config.service_port);

    let app = routes::router(AppState { store });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
