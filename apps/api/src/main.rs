mod anilist_client;
mod assignment;
mod config;
mod errors;
mod leetcode_client;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::anilist_client::AniListClient;
use crate::config::Config;
use crate::leetcode_client::LeetCodeClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Character API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize upstream clients (one per collaborator, shared for the process lifetime)
    let profiles = LeetCodeClient::new(&config.profile_api_url, config.upstream_timeout_secs)?;
    info!("LeetCode client initialized ({})", config.profile_api_url);

    let generator = LlmClient::new(
        config.generative_ai_api_key.clone(),
        &config.gemini_api_url,
        config.upstream_timeout_secs,
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let characters = AniListClient::new(&config.anilist_api_url, config.upstream_timeout_secs)?;
    info!("AniList client initialized ({})", config.anilist_api_url);

    // Build app state
    let state = AppState {
        profiles: Arc::new(profiles),
        generator: Arc::new(generator),
        characters: Arc::new(characters),
    };

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
