//! Exchange-agnostic domain logic.

pub mod error;
pub mod market;
pub mod money;
pub mod profit;
pub mod proposal;

// Core domain types
pub use error::DomainError;
pub use market::{MarketKey, MarketRegistry, MarketTradingPair};
pub use money::{Amount, Price};
pub use profit::ProfitPct;
pub use proposal::{ArbProposal, ArbProposalSide, TradeSide};
