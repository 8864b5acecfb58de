mod assets;
mod config;
mod content;
mod errors;
mod render;
mod routes;
mod scroll;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Datelike;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::AssetStore;
use crate::config::Config;
use crate::content::{portfolio, validate_portfolio};
use crate::render::render_page;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content is fixed; validate once and fail startup on a broken invariant.
    let portfolio = portfolio();
    validate_portfolio(&portfolio).context("Portfolio content is invalid")?;
    info!(
        sections = portfolio.sections.len(),
        assets = portfolio.assets().len(),
        "Portfolio content loaded"
    );

    let year = chrono::Utc::now().year();
    let page_html: Arc<str> = render_page(&portfolio, year).into();
    info!(bytes = page_html.len(), "Page rendered");

    let assets = AssetStore::new(&config.assets_dir);
    info!("Serving assets from {}", assets.root().display());

    let state = AppState {
        portfolio: Arc::new(portfolio),
        page_html,
        assets,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
