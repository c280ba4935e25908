//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your markets and quotes", path.display()));
    output::note(&format!(
        "2. Run: arb-proposal evaluate --config {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Amount", config.arbitrage.order_amount);
    output::field("Min profit", config.arbitrage.min_profitability);
    output::field(
        "First",
        format!(
            "{}:{}",
            config.first_market.connector, config.first_market.trading_pair
        ),
    );
    output::field(
        "Second",
        format!(
            "{}:{}",
            config.second_market.connector, config.second_market.trading_pair
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_a_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.first_market.connector, "binance");
        assert_eq!(config.second_market.connector, "uniswap");
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "existing").unwrap();

        let result = execute_init(&path, false);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
