//! Command-line and environment configuration for the server binary.

use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Signing secret used only when `--dev` is given without a secret.
pub const DEVELOPMENT_SECRET: &str = "tacheo-development-secret";

/// Server configuration. Every flag can also be supplied through the
/// environment.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// SQLite database file (or `:memory:`)
    #[arg(long, env = "TACHEO_DATABASE", default_value = "tacheo.db")]
    pub database: String,

    /// Address the HTTP API listens on
    #[arg(long, env = "TACHEO_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Secret used to sign session tokens
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, env = "TACHEO_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// PBKDF2 iterations for new password digests
    #[arg(long, env = "TACHEO_HASH_ITERATIONS", default_value_t = crate::account::domain::DEFAULT_HASH_ITERATIONS)]
    pub hash_iterations: u32,

    /// Development mode: allows running without a secret key
    #[arg(long)]
    pub dev: bool,
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No signing secret was given outside development mode.
    #[error("SECRET_KEY (or --secret-key) is required unless --dev is set")]
    MissingSecretKey,
}

impl ServerConfig {
    /// Returns the session signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecretKey`] when no non-blank secret is
    /// configured and development mode is off.
    pub fn session_secret(&self) -> Result<&str, ConfigError> {
        match self.secret_key.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => Ok(secret),
            _ if self.dev => Ok(DEVELOPMENT_SECRET),
            _ => Err(ConfigError::MissingSecretKey),
        }
    }
}
