use config::{Config as ConfigLoader, ConfigError, Environment, File};
use haven::{CompanionConfig, StorageBackend};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub companion: CompanionSettings,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub mongodb_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_database() -> String {
    "haven".to_string()
}

/// Companion timings in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct CompanionSettings {
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
    #[serde(default = "default_reply_jitter")]
    pub reply_jitter_ms: u64,
    #[serde(default = "default_auth_latency")]
    pub auth_latency_ms: u64,
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

fn default_reply_delay() -> u64 {
    1500
}

fn default_reply_jitter() -> u64 {
    1000
}

fn default_auth_latency() -> u64 {
    1000
}

fn default_event_buffer() -> usize {
    16
}

impl Default for CompanionSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
            reply_jitter_ms: default_reply_jitter(),
            auth_latency_ms: default_auth_latency(),
            event_buffer: default_event_buffer(),
        }
    }
}

impl From<CompanionSettings> for CompanionConfig {
    fn from(settings: CompanionSettings) -> Self {
        CompanionConfig::new()
            .with_reply_delay(
                Duration::from_millis(settings.reply_delay_ms),
                Duration::from_millis(settings.reply_jitter_ms),
            )
            .with_auth_latency(Duration::from_millis(settings.auth_latency_ms))
            .with_event_buffer(settings.event_buffer)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                request_timeout_secs: default_request_timeout(),
            },
            cors: CorsConfig {
                enabled: false,
                origins: Vec::new(),
            },
            storage: StorageConfig {
                backend: StorageBackend::default(),
                data_dir: default_data_dir(),
                database: default_database(),
            },
            companion: CompanionSettings::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
            mongodb_uri: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables prefixed with `HAVEN_`, sections split by `__`
    ///    (e.g. `HAVEN_SERVER__PORT=9000`, `HAVEN_STORAGE__BACKEND=memory`)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("HAVEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;

        // Secrets are never read from TOML
        if cfg.storage.backend == StorageBackend::Mongodb {
            cfg.mongodb_uri = std::env::var("MONGODB_URI").map_err(|_| {
                ConfigError::Message(
                    "MONGODB_URI environment variable is required for the mongodb backend"
                        .to_string(),
                )
            })?;
        }

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn companion_config(&self) -> CompanionConfig {
        self.companion.clone().into()
    }
}
