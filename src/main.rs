use anyhow::Context;
use oilfield_api::config::Config;
use oilfield_api::{db, routes};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing/logging
    tracing_subscriber::fmt::init();

    // Load configuration and environment variables to pass to the application
    let config: Config = Config::from_env();

    let db = db::open(Path::new(&config.db_path)).await?;
    db::ensure_schema(&db).await?;

    tracing::info!(
        "Starting server {} ({} deployment) ...",
        config.app_name,
        config.deployment.to_uppercase()
    );

    let addr: std::net::SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN_ADDR '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {addr}");

    let router = routes::build_router(&db, &config);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
