//! Market configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MARKET_DEFAULT_ADDRESS` - Address prefilled on the checkout form
//!   (default: Lapasan, Cagayan de Oro City)
//! - `MARKET_BUYER_NAME` - Customer name on cash-on-delivery orders
//!   (default: Lorenz Almonia)
//! - `MARKET_CHANNEL_BUFFER` - Mailbox size of each store actor (default: 32)
//! - `MARKET_NOTICE_MS` - How long the "added to cart" notice stays up
//!   (default: 2000)
//! - `MARKET_DELIVERY_ETA` - ETA shown on new deliveries (default: 3-5 days)

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ADDRESS: &str = "Lapasan, Cagayan de Oro City";
pub const DEFAULT_BUYER_NAME: &str = "Lorenz Almonia";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;
pub const DEFAULT_NOTICE_MS: u64 = 2000;
pub const DEFAULT_DELIVERY_ETA: &str = "3-5 days";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub default_address: String,
    pub buyer_name: String,
    pub channel_buffer: usize,
    pub notice_duration: Duration,
    pub delivery_eta: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_address: DEFAULT_ADDRESS.to_string(),
            buyer_name: DEFAULT_BUYER_NAME.to_string(),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_MS),
            delivery_eta: DEFAULT_DELIVERY_ETA.to_string(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable does not parse or is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let channel_buffer = parse_positive(&lookup, "MARKET_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER)?;
        let notice_ms = parse_positive(&lookup, "MARKET_NOTICE_MS", DEFAULT_NOTICE_MS)?;

        Ok(Self {
            default_address: text("MARKET_DEFAULT_ADDRESS", DEFAULT_ADDRESS),
            buyer_name: text("MARKET_BUYER_NAME", DEFAULT_BUYER_NAME),
            channel_buffer,
            notice_duration: Duration::from_millis(notice_ms),
            delivery_eta: text("MARKET_DELIVERY_ETA", DEFAULT_DELIVERY_ETA),
        })
    }
}

/// Parse a positive integer variable, falling back to `default` when unset.
fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value <= T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}
