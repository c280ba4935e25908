//! Handler for the `evaluate` command.

use std::path::Path;

use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::application::proposal::{create_arb_proposals, rank_profitable};
use crate::domain::{ArbProposal, MarketRegistry};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build proposals from a loaded configuration.
///
/// # Errors
///
/// Returns an error if a market reference or a proposal cannot be built.
pub fn build_proposals(config: &Config) -> Result<Vec<ArbProposal>> {
    let mut registry = MarketRegistry::new();
    let (first, second) = config.market_quotes(&mut registry)?;
    let proposals = create_arb_proposals(
        &first,
        &second,
        config.arbitrage.order_amount,
        config.arbitrage.slippage_buffers(),
    )?;
    Ok(proposals)
}

/// Execute `evaluate`.
pub fn execute(config_path: &Path, all: bool) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if output::verbosity() > 0 {
        config.logging.level = "debug".to_string();
    }
    config.init_logging();

    let proposals = build_proposals(&config)?;
    let min_profitability = config.arbitrage.min_profitability;
    info!(
        count = proposals.len(),
        %min_profitability,
        "Evaluating arbitrage proposals"
    );

    let shown: Vec<&ArbProposal> = if all {
        proposals.iter().collect()
    } else {
        rank_profitable(&proposals, min_profitability)
    };

    output::section("Proposals");
    output::field("Amount", config.arbitrage.order_amount);
    output::field("Min profit", output::format_profit(min_profitability.into()));

    if shown.is_empty() {
        output::warning("No profitable arbitrage proposals");
        return Ok(());
    }

    for (index, proposal) in shown.into_iter().enumerate() {
        output::proposal(index + 1, proposal);
    }

    Ok(())
}
