use std::sync::Arc;

use rust_decimal::Decimal;

use arb_proposal::domain::{ArbProposalSide, MarketRegistry, MarketTradingPair};

pub fn make_market(
    registry: &mut MarketRegistry,
    connector: &str,
    pair: &str,
) -> Arc<MarketTradingPair> {
    registry.add(MarketTradingPair::new(connector, pair))
}

pub fn make_side(market: &Arc<MarketTradingPair>, is_buy: bool, quote: Decimal) -> ArbProposalSide {
    ArbProposalSide::new(Arc::clone(market), is_buy, quote, quote, Decimal::ONE)
}
