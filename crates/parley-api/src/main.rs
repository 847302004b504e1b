//! Parley REST API entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, wires the in-memory store to an OpenAI-compatible
//! reply backend, and serves the chat API. The store is volatile: sessions
//! do not survive a restart.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parley_infra::openai::OpenAiReplyConfig;
use state::AppState;

#[derive(Parser)]
#[command(name = "parley", about = "Conversational chat API server", version)]
struct Cli {
    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, short, default_value_t = 8000)]
    port: u16,

    /// Model used for reply generation.
    #[arg(long, default_value = parley_infra::openai::config::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, default_value = parley_infra::openai::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// API key for the reply backend.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Override the system prompt.
    #[arg(long)]
    system_prompt: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,parley=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut config = OpenAiReplyConfig::new(cli.api_key)
        .with_model(cli.model)
        .with_base_url(cli.base_url);
    if let Some(prompt) = cli.system_prompt {
        config = config.with_system_prompt(prompt);
    }

    let state = AppState::init(config);
    let router = http::router::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Parley chat API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
