//! Taleforge HTTP server.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use taleforge_core::{LogFormat, init_tracing};
use taleforge_models::{
    FalClient, GeminiDriver, ImageGenerator, TextGenerationConfig, TextGenerator,
};
use taleforge_server::{AppState, ServiceConfig, StoryForwarder, StoryHandler, create_router};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "taleforge")]
#[command(about = "Generate illustrated children's stories", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "TALEFORGE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TALEFORGE_PORT", default_value_t = 8000)]
    port: u16,

    /// Emit logs as JSON
    #[arg(long, env = "TALEFORGE_JSON_LOGS")]
    json_logs: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    let directive = if cli.verbose { "debug" } else { "info" };
    init_tracing(format, directive).map_err(|e| anyhow::anyhow!(e))?;

    let config = ServiceConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let driver = GeminiDriver::new(config.gemini_api_key(), config.gemini_model())?;
    let text = TextGenerator::new(Arc::new(driver), TextGenerationConfig::default());

    let fal = FalClient::new(config.fal_key(), config.fal_model())?
        .with_base_url(config.fal_base_url());
    let image = ImageGenerator::new(Arc::new(fal));

    let http = reqwest::Client::builder()
        .user_agent(concat!("taleforge/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let handler = StoryHandler::new(
        text,
        image,
        StoryForwarder::with_client(http),
        config.storage_endpoint(),
    );
    let app = create_router(AppState::new(handler), config.cors_origin())?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Taleforge listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
