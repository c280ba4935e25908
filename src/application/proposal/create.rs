//! Build arbitrage proposals for one pair of markets.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    Amount, ArbProposal, ArbProposalSide, DomainError, MarketTradingPair, Price,
};

/// Quote snapshot for a single market at a given order amount.
///
/// `buy_quote` is the price paid to buy the amount, `sell_quote` the price
/// received for selling it. A missing quote means that direction cannot be
/// traded on this market.
#[derive(Debug, Clone)]
pub struct MarketQuote {
    pub market: Arc<MarketTradingPair>,
    pub buy_quote: Option<Price>,
    pub sell_quote: Option<Price>,
}

impl MarketQuote {
    /// Create a quote snapshot with both prices present.
    pub fn new(market: Arc<MarketTradingPair>, buy_quote: Price, sell_quote: Price) -> Self {
        Self {
            market,
            buy_quote: Some(buy_quote),
            sell_quote: Some(sell_quote),
        }
    }

    fn quote(&self, is_buy: bool) -> Option<Price> {
        if is_buy {
            self.buy_quote
        } else {
            self.sell_quote
        }
    }
}

/// Slippage allowance applied to each market's quotes to obtain order prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlippageBuffers {
    pub first: Decimal,
    pub second: Decimal,
}

impl SlippageBuffers {
    /// Same buffer on both markets.
    #[must_use]
    pub const fn uniform(buffer: Decimal) -> Self {
        Self {
            first: buffer,
            second: buffer,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        for buffer in [self.first, self.second] {
            if buffer < Decimal::ZERO || buffer >= Decimal::ONE {
                return Err(DomainError::InvalidSlippageBuffer { buffer });
            }
        }
        Ok(())
    }
}

/// Order price for a quote: buys are allowed to pay more, sells to receive less.
fn order_price(quote: Price, is_buy: bool, buffer: Decimal) -> Result<Price, DomainError> {
    let factor = if is_buy {
        Decimal::ONE.checked_add(buffer)
    } else {
        Decimal::ONE.checked_sub(buffer)
    };
    factor
        .and_then(|factor| quote.checked_mul(factor))
        .ok_or(DomainError::OrderPriceOverflow { quote, buffer })
}

fn build_side(
    quote: &MarketQuote,
    is_buy: bool,
    buffer: Decimal,
    amount: Amount,
) -> Result<Option<ArbProposalSide>, DomainError> {
    let Some(quote_price) = quote.quote(is_buy) else {
        return Ok(None);
    };
    let order_price = order_price(quote_price, is_buy, buffer)?;
    Ok(Some(ArbProposalSide::new(
        Arc::clone(&quote.market),
        is_buy,
        quote_price,
        order_price,
        amount,
    )))
}

/// Build the arbitrage proposals between two markets.
///
/// Two directions are considered, in this order: buy on `first` and sell on
/// `second`, then buy on `second` and sell on `first`. A direction is skipped
/// when either of its quotes is missing.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveAmount`] for a zero or negative amount
/// and [`DomainError::InvalidSlippageBuffer`] for a buffer outside `[0, 1)`.
/// Returns [`DomainError::OrderPriceOverflow`] when a buffered order price
/// does not fit in a `Decimal`.
pub fn create_arb_proposals(
    first: &MarketQuote,
    second: &MarketQuote,
    amount: Amount,
    buffers: SlippageBuffers,
) -> Result<Vec<ArbProposal>, DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::NonPositiveAmount { amount });
    }
    buffers.validate()?;

    let mut proposals = Vec::with_capacity(2);
    for first_is_buy in [true, false] {
        let first_leg = build_side(first, first_is_buy, buffers.first, amount)?;
        let second_leg = build_side(second, !first_is_buy, buffers.second, amount)?;

        match first_leg.zip(second_leg) {
            Some((first_side, second_side)) => {
                proposals.push(ArbProposal::new(first_side, second_side)?);
            }
            None => {
                debug!(
                    first = %first.market,
                    second = %second.market,
                    first_is_buy,
                    "Missing quote, skipping direction"
                );
            }
        }
    }

    debug!(
        first = %first.market,
        second = %second.market,
        count = proposals.len(),
        "Created arbitrage proposals"
    );

    Ok(proposals)
}
