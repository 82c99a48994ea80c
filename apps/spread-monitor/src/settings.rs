//! Monitor settings, loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FINNHUB_TOKEN`: Finnhub API token
//!
//! ## Optional
//! - `FINNHUB_BASE_URL`: Quote API base URL (default: `https://finnhub.io/api/v1`)
//! - `HTTP_TIMEOUT_SECS`: Quote request timeout in seconds (default: 10)
//! - `TRADES_FILE`: Path to the trade file (default: `trades.json`)
//! - `SAFE_BUFFER_PCT`: Safe-status buffer beyond the short strike, in
//!   percent (default: 5)

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::application::report::ReportConfig;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing required environment variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable present but unparseable.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// The rejected value.
        value: String,
    },
}

/// Finnhub connection settings.
#[derive(Debug, Clone)]
pub struct FinnhubSettings {
    /// API token.
    pub token: String,
    /// Quote API base URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

/// Monitor settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Finnhub connection settings.
    pub finnhub: FinnhubSettings,
    /// Path to the trade file.
    pub trades_path: PathBuf,
    /// Report configuration.
    pub report: ReportConfig,
}

const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TRADES_FILE: &str = "trades.json";

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|var| std::env::var(var).ok())
    }

    /// Load settings from an arbitrary variable source.
    ///
    /// Separated from [`Self::from_env`] so tests do not have to mutate
    /// process-wide environment state.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = get("FINNHUB_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("FINNHUB_TOKEN".to_string()))?;

        let base_url = get("FINNHUB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "HTTP_TIMEOUT_SECS".to_string(),
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let trades_path = get("TRADES_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_TRADES_FILE), PathBuf::from);

        let safe_buffer = match get("SAFE_BUFFER_PCT") {
            Some(value) => {
                let pct = value
                    .parse::<Decimal>()
                    .ok()
                    .filter(|pct| *pct >= Decimal::ZERO)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        var: "SAFE_BUFFER_PCT".to_string(),
                        value,
                    })?;
                pct / Decimal::ONE_HUNDRED
            }
            None => ReportConfig::default().safe_buffer,
        };

        Ok(Self {
            finnhub: FinnhubSettings {
                token,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            trades_path,
            report: ReportConfig { safe_buffer },
        })
    }
}
