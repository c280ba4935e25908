//! Profitability filtering and ordering.

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::ArbProposal;

/// Select proposals at or above `min_profitability`, most profitable first.
///
/// Proposals with undefined profit are skipped. Proposals with equal profit
/// keep their input order.
#[must_use]
pub fn rank_profitable(proposals: &[ArbProposal], min_profitability: Decimal) -> Vec<&ArbProposal> {
    let mut ranked: Vec<(Decimal, &ArbProposal)> = proposals
        .iter()
        .filter_map(|proposal| match proposal.profit_pct().value() {
            Some(profit) => Some((profit, proposal)),
            None => {
                warn!(
                    buy = %proposal.buy_side().market(),
                    sell = %proposal.sell_side().market(),
                    "Profit undefined, skipping proposal"
                );
                None
            }
        })
        .filter(|(profit, _)| *profit >= min_profitability)
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.into_iter().map(|(_, proposal)| proposal).collect()
}
