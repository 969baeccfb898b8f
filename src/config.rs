use std::path::PathBuf;
use std::time::Duration;

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::domain::cart::FLAT_SHIPPING_FEE;
use crate::domain::money::parse_price;

pub const DEFAULT_API_URL: &str = "http://localhost:8081/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = ".storefront-session.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub session_file: PathBuf,
    pub shipping_fee: BigDecimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            shipping_fee: BigDecimal::from(FLAT_SHIPPING_FEE),
        }
    }
}

impl Config {
    /// Reads `STOREFRONT_*` variables from the environment (and `.env`, once
    /// loaded by the caller).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(url) = lookup("STOREFRONT_API_URL") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    key: "STOREFRONT_API_URL",
                    value: url,
                });
            }
            config.api_base_url = url;
        }

        if let Some(raw) = lookup("STOREFRONT_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid {
                    key: "STOREFRONT_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(path) = lookup("STOREFRONT_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup("STOREFRONT_SHIPPING_FEE") {
            config.shipping_fee = parse_price(&raw).ok_or(ConfigError::Invalid {
                key: "STOREFRONT_SHIPPING_FEE",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}
