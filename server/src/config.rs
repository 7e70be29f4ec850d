//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::fmt;

use anyhow::{bail, Context, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => bail!("LOG_FORMAT must be `json` or `pretty`, got `{other}`"),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Hex-encoded Ed25519 public key used to verify interaction signatures
    pub public_key: String,

    /// Application ID, used to build invite links
    pub application_id: String,

    /// Bot token (optional, never logged)
    pub bot_token: Option<String>,

    /// Maximum accepted request body in bytes (default: 64KB)
    pub max_body_size: usize,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let public_key =
            env::var("DISCORD_PUBLIC_KEY").context("DISCORD_PUBLIC_KEY must be set")?;
        let application_id =
            env::var("DISCORD_APPLICATION_ID").context("DISCORD_APPLICATION_ID must be set")?;

        if public_key.trim().is_empty() {
            bail!("DISCORD_PUBLIC_KEY must not be empty");
        }
        if application_id.trim().is_empty() {
            bail!("DISCORD_APPLICATION_ID must not be empty");
        }

        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            public_key: public_key.trim().to_string(),
            application_id: application_id.trim().to_string(),
            bot_token: env::var("DISCORD_TOKEN").ok().filter(|t| !t.is_empty()),
            max_body_size: env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64 * 1024), // 64KB
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "tumbler_server=info,tower_http=info".into()),
            log_format: env::var("LOG_FORMAT")
                .ok()
                .map(|v| LogFormat::parse(&v))
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Check if a bot token was provided.
    #[must_use]
    pub const fn has_bot_token(&self) -> bool {
        self.bot_token.is_some()
    }

    /// Create a default configuration for testing.
    ///
    /// The public key belongs to the signing key with seed `[7; 32]`.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            public_key: "ea4a6c63e29c520abef5507b132ec5f9954776aebebe7b92421eea691446d22c".into(),
            application_id: "123456789012345678".into(),
            bot_token: None,
            max_body_size: 64 * 1024,
            log_level: "tumbler_server=debug".into(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("public_key", &self.public_key)
            .field("application_id", &self.application_id)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("max_body_size", &self.max_body_size)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}
