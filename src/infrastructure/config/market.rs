//! Market snapshot configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::proposal::MarketQuote;
use crate::domain::{DomainError, MarketRegistry, MarketTradingPair};
use crate::error::{ConfigError, Result};

/// A market and the quotes observed on it for the configured order amount.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    pub connector: String,
    pub trading_pair: String,
    /// Price paid when buying the order amount.
    #[serde(default)]
    pub buy_quote: Option<Decimal>,
    /// Price received when selling the order amount.
    #[serde(default)]
    pub sell_quote: Option<Decimal>,
}

impl MarketConfig {
    /// Register the market and pair it with its quotes.
    ///
    /// # Errors
    ///
    /// Returns an error when the connector or trading pair is malformed.
    pub fn to_quote(&self, registry: &mut MarketRegistry) -> Result<MarketQuote> {
        Ok(MarketQuote {
            market: registry.add(self.market()?),
            buy_quote: self.buy_quote,
            sell_quote: self.sell_quote,
        })
    }

    /// Build the market reference, reporting failures against the config field.
    fn market(&self) -> Result<MarketTradingPair> {
        let market = MarketTradingPair::try_new(&self.connector, &self.trading_pair).map_err(
            |e| match e {
                DomainError::EmptyConnector => ConfigError::MissingField { field: "connector" },
                e => ConfigError::InvalidValue {
                    field: "trading_pair",
                    reason: e.to_string(),
                },
            },
        )?;
        Ok(market)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.market()?;

        let quotes = [("buy_quote", self.buy_quote), ("sell_quote", self.sell_quote)];
        for (field, quote) in quotes {
            if quote.is_some_and(|q| q < Decimal::ZERO) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be 0 or greater".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    fn market(connector: &str, pair: &str) -> MarketConfig {
        MarketConfig {
            connector: connector.to_string(),
            trading_pair: pair.to_string(),
            buy_quote: Some(dec!(100)),
            sell_quote: Some(dec!(99)),
        }
    }

    #[test]
    fn to_quote_registers_market() {
        let mut registry = MarketRegistry::new();
        let quote = market("binance", "ETH-USDT").to_quote(&mut registry).unwrap();

        assert_eq!(quote.market.base_asset(), "ETH");
        assert_eq!(quote.buy_quote, Some(dec!(100)));
        assert!(registry.get("binance", "ETH-USDT").is_some());
    }

    #[test]
    fn validate_reports_missing_connector() {
        let result = market("", "ETH-USDT").validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "connector" }))
        ));
    }

    #[test]
    fn validate_reports_malformed_pair() {
        let result = market("binance", "ETHUSDT").validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "trading_pair",
                ..
            }))
        ));
    }

    #[test]
    fn validate_rejects_negative_quote() {
        let mut config = market("binance", "ETH-USDT");
        config.sell_quote = Some(dec!(-1));
        let result = config.validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "sell_quote",
                ..
            }))
        ));
    }

    #[test]
    fn validate_allows_zero_and_missing_quotes() {
        let mut config = market("binance", "ETH-USDT");
        config.buy_quote = Some(Decimal::ZERO);
        config.sell_quote = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn to_quote_reports_malformed_pair_against_field() {
        let mut registry = MarketRegistry::new();
        let result = market("binance", "ETH-").to_quote(&mut registry);

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "trading_pair",
                ..
            }))
        ));
        assert!(registry.is_empty());
    }
}
