//! SID chat API server binary.
//!
//! Serves `POST /api/chat`, `GET /health` and `GET /` until interrupted.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use sid_api::AppState;
use sid_api::config::{ApiConfig, DEFAULT_PORT};
use sid_core::dispatch::{Dispatcher, DispatcherConfig};
use sid_core::filler::RandomPicker;
use sid_core::generative::gemini::{DEFAULT_BASE_URL, GeminiConfig, GeminiTransport};
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "sid_api_server", about = "SID chat API server")]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "SID_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "SID_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Gemini API key. Without it every chat request answers 500.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini API base URL (scheme + host).
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    gemini_base_url: String,

    /// Candidate models in priority order, comma separated.
    #[arg(long, env = "GEMINI_MODELS", value_delimiter = ',')]
    models: Vec<String>,

    /// Timeout for a single model call, in seconds.
    #[arg(long, env = "SID_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sid_api=debug,sid_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig::new(format!("{}:{}", args.host, args.port), args.gemini_api_key);
    if config.has_credential() {
        info!("Gemini API key present");
    } else {
        warn!("Gemini API key missing; /api/chat will answer 500 until GEMINI_API_KEY is set");
    }

    let dispatcher_config = DispatcherConfig::default().with_candidates(&args.models);
    info!(candidates = ?dispatcher_config.candidates, "configured candidate models");

    let gemini = GeminiConfig {
        base_url: args.gemini_base_url,
        api_key: config.gemini_api_key.clone().unwrap_or_default(),
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };
    info!(gemini = ?gemini, "configured generative transport");

    let client = reqwest::Client::builder().build()?;
    let transport = Arc::new(GeminiTransport::new(client, gemini));

    let state = AppState {
        config: config.clone(),
        dispatcher: Arc::new(Dispatcher::new(dispatcher_config, transport)),
        filler: Arc::new(RandomPicker),
    };

    let app = sid_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "SID API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
