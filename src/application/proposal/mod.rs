//! Proposal use cases: building both directions for a market pair and
//! selecting the profitable ones.

mod create;
mod rank;

pub use create::{create_arb_proposals, MarketQuote, SlippageBuffers};
pub use rank::rank_profitable;
