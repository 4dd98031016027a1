//! Server Configuration
//!
//! Sources, lowest precedence first: `config/default`, `config/local`, an
//! explicit `--config` file, then `RAMPGATE__SECTION__KEY` environment
//! variables. CLI flags are applied on top in `main`.

use rampgate_api::ApiConfig;
use rampgate_auth::IdentityConfig;
use rampgate_onramp::OnrampConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Directory holding `default.*` and `local.*`, relative to the working directory
const CONFIG_DIR: &str = "config";

/// Environment variable prefix
const ENV_PREFIX: &str = "RAMPGATE";

/// Server configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Identity provider used for token verification and deletion
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Active on-ramp vendor
    #[serde(default)]
    pub onramp: OnrampConfig,

    /// API middleware configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Server binding settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` wins
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Expose a Prometheus scrape endpoint
    #[serde(default)]
    pub enabled: bool,

    /// Metrics port (separate from main server)
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_metrics_port(),
        }
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl ServerConfig {
    /// Load configuration from environment and optional config file
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::load_from(Path::new(CONFIG_DIR), config_path, None)
    }

    /// Layered load rooted at `config_dir`
    ///
    /// `env` stands in for the process environment when given.
    pub fn load_from(
        config_dir: &Path,
        config_path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from(config_dir.join("default").as_path()).required(false))
            .add_source(config::File::from(config_dir.join("local").as_path()).required(false));

        // An explicit file beats the shipped defaults
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let server_config = builder.build()?.try_deserialize()?;
        Ok(server_config)
    }

    /// Check everything needed to serve requests
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(identity_errors) = self.identity.validate() {
            errors.extend(identity_errors);
        }
        if let Err(onramp_errors) = self.onramp.validate() {
            errors.extend(onramp_errors);
        }
        if let Err(e) = self.server.socket_addr() {
            errors.push(e.to_string());
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            errors.push(format!(
                "logging.format must be json or pretty, got {}",
                self.logging.format
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
