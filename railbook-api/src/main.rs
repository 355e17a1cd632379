use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use railbook_api::{app, app_config::Config, AppState};
use railbook_core::TokioDelay;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railbook_api=debug,railbook_booking=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let port = config.server.port;
    tracing::info!("Starting Railbook on port {}", port);

    let app_state = AppState::new(config, Arc::new(TokioDelay));
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
