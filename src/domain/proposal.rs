//! Arbitrage proposal types.
//!
//! An [`ArbProposal`] pairs a buy on one market with a sell on another. Each
//! leg is an [`ArbProposalSide`] carrying what is needed to submit the order.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::market::MarketTradingPair;
use super::money::{Amount, Price};
use super::profit::ProfitPct;

/// Order direction of a proposal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Side for an `is_buy` flag.
    #[must_use]
    pub const fn from_is_buy(is_buy: bool) -> Self {
        if is_buy {
            Self::Buy
        } else {
            Self::Sell
        }
    }

    /// Lowercase name of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a proposed arbitrage trade.
///
/// Holds the market where the order would be placed, its direction, the quote
/// observed for `amount` and the price to actually submit. The order price may
/// differ from the quote, e.g. when a slippage allowance is applied.
#[derive(Debug, Clone, Serialize)]
pub struct ArbProposalSide {
    market: Arc<MarketTradingPair>,
    is_buy: bool,
    quote_price: Price,
    order_price: Price,
    amount: Amount,
}

impl ArbProposalSide {
    /// Create a new proposal side.
    pub fn new(
        market: Arc<MarketTradingPair>,
        is_buy: bool,
        quote_price: Price,
        order_price: Price,
        amount: Amount,
    ) -> Self {
        Self {
            market,
            is_buy,
            quote_price,
            order_price,
            amount,
        }
    }

    /// Get the market where the order would be submitted.
    #[must_use]
    pub fn market(&self) -> &Arc<MarketTradingPair> {
        &self.market
    }

    /// True if this is a buy order.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        self.is_buy
    }

    /// Get the order direction.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        TradeSide::from_is_buy(self.is_buy)
    }

    /// Get the quote price for the order amount.
    #[must_use]
    pub const fn quote_price(&self) -> Price {
        self.quote_price
    }

    /// Get the price used for order submission.
    #[must_use]
    pub const fn order_price(&self) -> Price {
        self.order_price
    }

    /// Get the order amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for ArbProposalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Connector: {}  Side: {}  Quote Price: {}  Order Price: {}  Amount: {}",
            self.market.display_name(),
            self.side(),
            self.quote_price,
            self.order_price,
            self.amount
        )
    }
}

/// An arbitrage proposal made of one buy side and one sell side.
///
/// Sides may be given in either order; [`ArbProposal::buy_side`] and
/// [`ArbProposal::sell_side`] select them by direction.
#[derive(Debug, Clone, Serialize)]
pub struct ArbProposal {
    first_side: ArbProposalSide,
    second_side: ArbProposalSide,
}

impl ArbProposal {
    /// Pair two sides into a proposal.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProposal`] when both sides have the same
    /// direction.
    pub fn new(
        first_side: ArbProposalSide,
        second_side: ArbProposalSide,
    ) -> Result<Self, DomainError> {
        if first_side.is_buy == second_side.is_buy {
            return Err(DomainError::InvalidProposal);
        }
        Ok(Self {
            first_side,
            second_side,
        })
    }

    /// Get the first side as supplied at construction.
    #[must_use]
    pub const fn first_side(&self) -> &ArbProposalSide {
        &self.first_side
    }

    /// Get the second side as supplied at construction.
    #[must_use]
    pub const fn second_side(&self) -> &ArbProposalSide {
        &self.second_side
    }

    /// Get the buy leg.
    #[must_use]
    pub const fn buy_side(&self) -> &ArbProposalSide {
        if self.first_side.is_buy {
            &self.first_side
        } else {
            &self.second_side
        }
    }

    /// Get the sell leg.
    #[must_use]
    pub const fn sell_side(&self) -> &ArbProposalSide {
        if self.first_side.is_buy {
            &self.second_side
        } else {
            &self.first_side
        }
    }

    /// Profit as a fraction of the buy cost (e.g. `0.01` for 1%).
    ///
    /// Computed from quote prices as `(sell - buy) / buy`. A zero buy quote
    /// yields [`ProfitPct::Undefined`] instead of a division error, as does a
    /// quotient too large for `Decimal`.
    #[must_use]
    pub fn profit_pct(&self) -> ProfitPct {
        let buy = self.buy_side().quote_price;
        let sell = self.sell_side().quote_price;

        if buy == Decimal::ZERO {
            return ProfitPct::Undefined;
        }

        sell.checked_sub(buy)
            .and_then(|spread| spread.checked_div(buy))
            .map_or(ProfitPct::Undefined, ProfitPct::Defined)
    }
}

impl fmt::Display for ArbProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "First Side - {}\nSecond Side - {}",
            self.first_side, self.second_side
        )
    }
}
