//! Two-legged arbitrage proposals.
//!
//! A proposal pairs a buy on one market with a sell on another and reports
//! the profit of the pair, computed with exact decimal arithmetic.
//!
//! # Modules
//!
//! - [`domain`] - Markets, proposal sides, proposals and profit values
//! - [`application`] - Building proposals for a market pair and ranking them
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`adapter`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use arb_proposal::domain::{ArbProposal, ArbProposalSide, MarketTradingPair};
//! use rust_decimal_macros::dec;
//!
//! let binance = Arc::new(MarketTradingPair::new("binance", "ETH-USDT"));
//! let uniswap = Arc::new(MarketTradingPair::new("uniswap", "WETH-USDT"));
//!
//! let proposal = ArbProposal::new(
//!     ArbProposalSide::new(binance, true, dec!(100), dec!(100), dec!(1)),
//!     ArbProposalSide::new(uniswap, false, dec!(110), dec!(110), dec!(1)),
//! )?;
//!
//! assert_eq!(proposal.profit_pct(), dec!(0.10));
//! # Ok::<(), arb_proposal::domain::DomainError>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
