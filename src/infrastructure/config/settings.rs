//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file describing two markets, the quotes
//! observed on them and how proposals between them are sized.
//!
//! # Example
//!
//! ```no_run
//! use arb_proposal::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::arbitrage::ArbitrageConfig;
use super::logging::LoggingConfig;
use super::market::MarketConfig;
use crate::application::proposal::MarketQuote;
use crate::domain::MarketRegistry;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Proposal sizing and profitability settings.
    pub arbitrage: ArbitrageConfig,

    /// Market proposals are built from first.
    pub first_market: MarketConfig,

    /// Market paired with `first_market`.
    pub second_market: MarketConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.arbitrage.validate()?;
        self.first_market.validate()?;
        self.second_market.validate()?;

        if self.first_market.connector == self.second_market.connector
            && self.first_market.trading_pair == self.second_market.trading_pair
        {
            return Err(ConfigError::InvalidValue {
                field: "second_market",
                reason: "must differ from first_market".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Register both markets and return their quote snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if a market reference cannot be built.
    pub fn market_quotes(&self, registry: &mut MarketRegistry) -> Result<(MarketQuote, MarketQuote)> {
        let first = self.first_market.to_quote(registry)?;
        let second = self.second_market.to_quote(registry)?;
        Ok((first, second))
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
