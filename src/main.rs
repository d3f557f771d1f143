use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rust_demo_api::config::Config;
use rust_demo_api::handlers;
use rust_demo_api::loader::ResourceLoader;
use rust_demo_api::state::AppState;
use rust_demo_api::store::FormStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rust-demo-api starting");

    let config = Arc::new(Config::from_env()?);
    config.log_startup();

    let state = AppState {
        store: FormStore::new(),
        resources: ResourceLoader::new(&config.content_dir),
        config: config.clone(),
    };

    let app = handlers::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app).await?;

    Ok(())
}
