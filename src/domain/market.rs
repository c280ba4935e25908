//! Market-related domain types.
//!
//! - [`MarketTradingPair`] - A connector together with the trading pair traded on it
//! - [`MarketKey`] - Lookup key for a market (`connector:TRADING-PAIR`)
//! - [`MarketRegistry`] - Owner of shared market handles

use std::collections::HashMap;
use std::fmt;
use std::result::Result;
use std::sync::Arc;

use serde::Serialize;

use super::error::DomainError;

/// A trading pair listed on a specific connector.
///
/// This is the market reference carried by each proposal side. The connector
/// name doubles as the human-readable display name in proposal output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MarketTradingPair {
    connector: String,
    trading_pair: String,
    base_asset: String,
    quote_asset: String,
}

impl MarketTradingPair {
    /// Create a market, deriving base and quote assets from the trading pair.
    ///
    /// A pair without a `-` separator yields the whole pair as the base asset
    /// and an empty quote asset. Use [`MarketTradingPair::try_new`] to reject
    /// such pairs.
    pub fn new(connector: impl Into<String>, trading_pair: impl Into<String>) -> Self {
        let trading_pair = trading_pair.into();
        let (base, quote) = trading_pair
            .split_once('-')
            .unwrap_or((trading_pair.as_str(), ""));
        let (base_asset, quote_asset) = (base.to_string(), quote.to_string());
        Self {
            connector: connector.into(),
            trading_pair,
            base_asset,
            quote_asset,
        }
    }

    /// Create a market with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `connector` must not be empty
    /// - `trading_pair` must be `BASE-QUOTE` with both parts non-empty
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        connector: impl Into<String>,
        trading_pair: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let connector = connector.into();
        let trading_pair = trading_pair.into();

        if connector.trim().is_empty() {
            return Err(DomainError::EmptyConnector);
        }

        match trading_pair.split_once('-') {
            Some((base, quote)) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self::new(connector, trading_pair))
            }
            _ => Err(DomainError::InvalidTradingPair { trading_pair }),
        }
    }

    /// Create a market with explicitly supplied assets.
    pub fn with_assets(
        connector: impl Into<String>,
        trading_pair: impl Into<String>,
        base_asset: impl Into<String>,
        quote_asset: impl Into<String>,
    ) -> Self {
        Self {
            connector: connector.into(),
            trading_pair: trading_pair.into(),
            base_asset: base_asset.into(),
            quote_asset: quote_asset.into(),
        }
    }

    /// Get the connector name.
    #[must_use]
    pub fn connector(&self) -> &str {
        &self.connector
    }

    /// Human-readable name of the venue, used in textual representations.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.connector
    }

    /// Get the trading pair.
    #[must_use]
    pub fn trading_pair(&self) -> &str {
        &self.trading_pair
    }

    /// Get the base asset.
    #[must_use]
    pub fn base_asset(&self) -> &str {
        &self.base_asset
    }

    /// Get the quote asset.
    #[must_use]
    pub fn quote_asset(&self) -> &str {
        &self.quote_asset
    }

    /// Registry key for this market.
    #[must_use]
    pub fn key(&self) -> MarketKey {
        MarketKey::new(&self.connector, &self.trading_pair)
    }
}

impl fmt::Display for MarketTradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.connector, self.trading_pair)
    }
}

/// Registry key identifying a market by connector and trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketKey(String);

impl MarketKey {
    /// Create a key from connector and trading pair.
    pub fn new(connector: &str, trading_pair: &str) -> Self {
        Self(format!("{connector}:{trading_pair}"))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of market references.
///
/// Proposal sides hold `Arc` handles handed out by the registry, so a market
/// is shared rather than copied into every side.
#[derive(Debug, Default)]
pub struct MarketRegistry {
    markets: HashMap<MarketKey, Arc<MarketTradingPair>>,
}

impl MarketRegistry {
    /// Create an empty market registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markets: HashMap::new(),
        }
    }

    /// Register a market and return its shared handle.
    ///
    /// Registering a market whose key is already present returns the existing
    /// handle and leaves the registry unchanged.
    pub fn add(&mut self, market: MarketTradingPair) -> Arc<MarketTradingPair> {
        self.markets
            .entry(market.key())
            .or_insert_with(|| Arc::new(market))
            .clone()
    }

    /// Look up a market by connector and trading pair.
    #[must_use]
    pub fn get(&self, connector: &str, trading_pair: &str) -> Option<Arc<MarketTradingPair>> {
        self.markets
            .get(&MarketKey::new(connector, trading_pair))
            .cloned()
    }

    /// Get the number of registered markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
