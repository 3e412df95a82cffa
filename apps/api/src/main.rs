use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jargon_api::config::Config;
use jargon_api::llm_client::LlmClient;
use jargon_api::routes::build_router;
use jargon_api::state::AppState;
use jargon_api::translation::translator::Translator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
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

    info!("Starting Jargon API v{}", env!("CARGO_PKG_VERSION"));

    if config.provider.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY is not set; every translation will return the fallback result");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.provider.clone())?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        config.provider.model, config.provider.base_url
    );

    let state = AppState {
        translator: Translator::new(Arc::new(llm), &config.provider),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser front-end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
