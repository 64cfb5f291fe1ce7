use anyhow::Context;

use stocktrack_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocktrack_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let inventory = app::services::build_inventory(&config);
    let router = app::build_app(inventory);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
