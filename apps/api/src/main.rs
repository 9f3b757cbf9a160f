mod config;
mod db;
mod errors;
mod experiences;
mod export;
mod generation;
mod llm_client;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::experiences::store::ExperienceStore;
use crate::generation::template::Profile;
use crate::llm_client::OpenAiClient;
use crate::rate_limit::{RateGate, SystemClock};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (a missing or malformed API key stops here)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Wizard v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite experience store
    let store = ExperienceStore::new(create_pool(&config.database_path).await?);

    // Initialize LLM client
    let llm = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    )
    .context("failed to initialize LLM client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let gate = RateGate::new(Duration::from_secs(config.rate_limit_cooldown_secs));
    info!("Rate limit cooldown: {}s", gate.cooldown().as_secs());

    let profile = Profile::from_env();
    info!("Resume profile loaded for {}", profile.name);

    // Build app state
    let state = AppState {
        store,
        llm: Arc::new(llm),
        gate: Arc::new(gate),
        clock: Arc::new(SystemClock),
        profile: Arc::new(profile),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Local desktop service: bind to loopback only.
    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
