use anyhow::Context;
use backend::{api, config::ServerConfig};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let search = config.search_config();
    info!(
        max_ply = search.max_ply,
        transposition_table = search.use_transposition_table,
        "search configured"
    );

    let app = api::router(search);
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("API listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
