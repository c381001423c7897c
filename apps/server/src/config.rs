//! Layered service configuration
//!
//! Precedence, lowest first: built-in defaults, `readcommend.toml` (or the
//! file named by `--config`), `READCOMMEND__SECTION__KEY` environment
//! variables (a `.env` file is loaded first), then command-line flags.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use ::config::{Config as Settings, ConfigError, Environment, File};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use sqlx::postgres::PgSslMode;

const ENV_PREFIX: &str = "READCOMMEND";
const DEFAULT_CONFIG_FILE: &str = "readcommend";
const FILE_ROTATIONS: [&str; 4] = ["daily", "hourly", "minutely", "never"];

/// Command-line flags. Every flag overrides the matching config key.
#[derive(Debug, Default, Parser)]
#[clap(name = "readcommend-server")]
#[clap(version, about = "Book recommendation search service")]
pub struct Cli {
    /// Config file to read instead of ./readcommend.toml
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[clap(long)]
    pub host: Option<String>,

    #[clap(long)]
    pub port: Option<u16>,

    #[clap(long)]
    pub db_host: Option<String>,

    #[clap(long)]
    pub db_port: Option<u16>,

    #[clap(long)]
    pub db_name: Option<String>,

    #[clap(long)]
    pub db_schema: Option<String>,

    /// disable, allow, prefer, require, verify-ca or verify-full
    #[clap(long)]
    pub db_ssl_mode: Option<String>,

    #[clap(long)]
    pub db_username: Option<String>,

    #[clap(long)]
    pub db_password: Option<String>,

    #[clap(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_seconds: 30,
            cors_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Schema placed first on the connection `search_path`.
    pub schema: String,
    pub ssl_mode: String,
    pub username: String,
    pub password: String,
    pub pool_max_size: u32,
    pub pool_min_size: u32,
    pub pool_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "readcommend".to_string(),
            schema: "public".to_string(),
            ssl_mode: "disable".to_string(),
            username: "postgres".to_string(),
            password: String::new(),
            pool_max_size: 10,
            pool_min_size: 0,
            pool_timeout_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// daily, hourly, minutely or never
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "readcommend".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from every layer.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Settings::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        let overrides: [(&str, Option<::config::Value>); 10] = [
            ("server.host", cli.host.clone().map(Into::into)),
            ("server.port", cli.port.map(|p| i64::from(p).into())),
            ("database.host", cli.db_host.clone().map(Into::into)),
            ("database.port", cli.db_port.map(|p| i64::from(p).into())),
            ("database.name", cli.db_name.clone().map(Into::into)),
            ("database.schema", cli.db_schema.clone().map(Into::into)),
            ("database.ssl_mode", cli.db_ssl_mode.clone().map(Into::into)),
            ("database.username", cli.db_username.clone().map(Into::into)),
            ("database.password", cli.db_password.clone().map(Into::into)),
            ("logging.level", cli.log_level.clone().map(Into::into)),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }
        if self.server.request_timeout_seconds == 0 {
            return Err("server.request_timeout_seconds must be greater than 0".to_string());
        }
        if self.database.port == 0 {
            return Err("database.port must be greater than 0".to_string());
        }
        if self.database.name.trim().is_empty() {
            return Err("database.name must not be empty".to_string());
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be greater than 0".to_string());
        }
        if self.database.pool_min_size > self.database.pool_max_size {
            return Err(format!(
                "database.pool_min_size ({}) exceeds database.pool_max_size ({})",
                self.database.pool_min_size, self.database.pool_max_size
            ));
        }
        if self.database.ssl_mode.parse::<PgSslMode>().is_err() {
            return Err(format!(
                "database.ssl_mode '{}' is not a PostgreSQL SSL mode",
                self.database.ssl_mode
            ));
        }
        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(format!(
                "logging.file_rotation '{}' must be one of {}",
                self.logging.file_rotation,
                FILE_ROTATIONS.join(", ")
            ));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()
            .with_context(|| format!("Failed to resolve {}", self.server.host))?
            .next()
            .with_context(|| format!("No address found for {}", self.server.host))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }
}
