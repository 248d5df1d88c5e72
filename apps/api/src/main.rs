mod advisory;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisory::{AdvisoryClient, InsightProvider, LlmInsightProvider, UnconfiguredProvider};
use crate::catalog::builder::build;
use crate::catalog::definitions::DEFINITIONS;
use crate::catalog::filter::categories;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting VisaTrack API v{}", env!("CARGO_PKG_VERSION"));

    // Build the catalog before anything listens; bad table data aborts startup
    let catalog = build(DEFINITIONS, config.series_mode).context("Occupation catalog is invalid")?;
    if catalog.is_empty() {
        bail!("Occupation catalog is empty");
    }
    info!(
        occupations = catalog.len(),
        categories = categories(&catalog).len() - 1,
        series_mode = %config.series_mode,
        "Occupation catalog built"
    );

    // Initialize advisory provider (Gemini when a key is configured)
    let provider: Arc<dyn InsightProvider> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                &config.advisory_api_url,
                Duration::from_secs(config.advisory_timeout_secs),
                config.advisory_max_attempts,
            )?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmInsightProvider(llm))
        }
        None => {
            warn!("GEMINI_API_KEY not set; advisory panel will serve fallback insights");
            Arc::new(UnconfiguredProvider)
        }
    };
    let advisor = AdvisoryClient::new(provider);
    info!("Advisory provider: {}", advisor.provider_name());

    // Build app state
    let state = AppState::new(catalog, advisor);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
