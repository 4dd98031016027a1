//! Rampgate API Server
//!
//! Serves authenticated fiat on-ramp URLs and self-service account deletion.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings
//! rampgate-server
//!
//! # Start with custom config
//! rampgate-server --config /path/to/config.toml
//!
//! # Start with environment overrides
//! RAMPGATE__SERVER__PORT=8080 RAMPGATE__ONRAMP__PROVIDER=sardine rampgate-server
//! ```

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rampgate_api::{create_router, AppState};
use rampgate_auth::{IdentityConfig, IdentityProvider, PrivyClient};
use rampgate_onramp::{OnrampConfig, OnrampProvider};

use crate::config::ServerConfig;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Rampgate API Server
#[derive(Parser, Debug)]
#[command(name = "rampgate-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, env = "RAMPGATE_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "RAMPGATE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RAMPGATE_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RAMPGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, env = "RAMPGATE_LOG_FORMAT")]
    log_format: Option<String>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut server_config = ServerConfig::load(args.config.as_deref())?;
    args.apply(&mut server_config);

    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Rampgate API Server"
    );

    validate_config(&server_config)?;

    let identity = init_identity(&server_config.identity)?;
    let onramp = init_onramp(&server_config.onramp)?;

    let state = Arc::new(AppState::new(identity, onramp));
    let app = create_router(state, server_config.api.clone());

    if server_config.metrics.enabled {
        start_metrics_server(&server_config.metrics)?;
    }

    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

// =============================================================================
// Initialization Functions
// =============================================================================

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber
                .with(fmt::layer().json().with_target(true))
                .try_init()?;
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .try_init()?;
        }
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &ServerConfig) -> anyhow::Result<()> {
    if let Err(errors) = config.validate() {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }

    Ok(())
}

/// Initialize the identity provider client
fn init_identity(config: &IdentityConfig) -> anyhow::Result<Arc<dyn IdentityProvider>> {
    let client = PrivyClient::new(config.clone())?;

    tracing::info!(
        app_id = %client.app_id(),
        api_url = %config.api_url,
        "Identity provider initialized"
    );

    Ok(Arc::new(client))
}

/// Initialize the configured on-ramp vendor
fn init_onramp(config: &OnrampConfig) -> anyhow::Result<OnrampProvider> {
    let provider = OnrampProvider::from_config(config)?;

    tracing::info!(provider = %provider.kind(), "On-ramp provider initialized");

    Ok(provider)
}

/// Start Prometheus metrics server
fn start_metrics_server(config: &config::MetricsConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;

    tracing::info!(port = config.port, "Metrics server started");

    Ok(())
}

// =============================================================================
// Graceful Shutdown
// =============================================================================

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, draining in-flight requests");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, draining in-flight requests");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
