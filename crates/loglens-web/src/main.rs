//! Loglens Web Server
//!
//! Run with: cargo run -p loglens-web

use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use loglens_client::DetectorClient;
use loglens_web::config::Config;
use loglens_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    info!("Starting Loglens Web Server...");

    let detector = DetectorClient::new(
        Some(&config.detector.base_url),
        Duration::from_secs(config.detector.timeout_secs),
    )?;
    match detector.health_check().await {
        Ok(true) => info!(url = %config.detector.base_url, "Detector service reachable"),
        _ => warn!(
            url = %config.detector.base_url,
            "Detector service not reachable yet; uploads will fail until it is up"
        ),
    }

    let state = AppState::new(detector);
    let app = loglens_web::router::build_router(state, config.server.max_upload_mb);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("🚀 Server listening on http://{}", addr);
    info!("📱 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
