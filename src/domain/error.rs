//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by validating constructors such as
//! [`ArbProposal::new`](super::proposal::ArbProposal::new).
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use std::sync::Arc;
//!
//! use arb_proposal::domain::{ArbProposal, ArbProposalSide, DomainError, MarketTradingPair};
//! use rust_decimal_macros::dec;
//!
//! let market = Arc::new(MarketTradingPair::new("binance", "ETH-USDT"));
//! let first = ArbProposalSide::new(market.clone(), true, dec!(100), dec!(100), dec!(1));
//! let second = ArbProposalSide::new(market, true, dec!(110), dec!(110), dec!(1));
//!
//! // Two buys do not form an arbitrage
//! let result = ArbProposal::new(first, second);
//!
//! assert!(matches!(result, Err(DomainError::InvalidProposal)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Both sides of a proposal point in the same direction.
    #[error("first_side and second_side must be on different side of buy and sell")]
    InvalidProposal,

    /// Trading pair is not of the form `BASE-QUOTE`.
    #[error("invalid trading pair '{trading_pair}': expected BASE-QUOTE")]
    InvalidTradingPair {
        /// The rejected trading pair.
        trading_pair: String,
    },

    /// Connector name is empty.
    #[error("connector name cannot be empty")]
    EmptyConnector,

    /// Slippage buffer must be in `[0, 1)`.
    #[error("slippage buffer must be within [0, 1), got {buffer}")]
    InvalidSlippageBuffer {
        /// The rejected buffer.
        buffer: Decimal,
    },

    /// Order amount must be positive.
    #[error("order amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Applying the slippage buffer to a quote exceeds the decimal range.
    #[error("order price overflows for quote {quote} with slippage buffer {buffer}")]
    OrderPriceOverflow {
        /// The quote the buffer was applied to.
        quote: Decimal,
        /// The slippage buffer.
        buffer: Decimal,
    },
}
