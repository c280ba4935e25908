mod support;

use rust_decimal_macros::dec;

use arb_proposal::error::{ConfigError, Error};
use arb_proposal::infrastructure::config::settings::Config;

use support::config::{write_temp_config, VALID_CONFIG};

#[test]
fn config_loads_from_file() {
    let (_dir, path) = write_temp_config(VALID_CONFIG);

    let config = Config::load(&path).expect("load config");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.arbitrage.order_amount, dec!(1));
    assert_eq!(config.arbitrage.min_profitability, dec!(0.01));
    assert_eq!(config.first_market.buy_quote, Some(dec!(100)));
    assert_eq!(config.second_market.trading_pair, "WETH-USDT");
}

#[test]
fn config_rejects_invalid_slippage_buffer() {
    let toml = VALID_CONFIG.replace(
        "min_profitability = \"0.01\"",
        "min_profitability = \"0.01\"\nfirst_market_slippage_buffer = \"1.5\"",
    );

    let (_dir, path) = write_temp_config(&toml);
    let result = Config::load(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "first_market_slippage_buffer",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid slippage buffer error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid buffer to be rejected, got {}",
            config.arbitrage.first_market_slippage_buffer
        ),
    }
}

#[test]
fn config_rejects_negative_amount() {
    let toml = VALID_CONFIG.replace("order_amount = \"1\"", "order_amount = \"-1\"");

    let (_dir, path) = write_temp_config(&toml);
    let result = Config::load(&path);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "order_amount",
                ..
            }))
        ),
        "Expected order_amount error, got {result:?}"
    );
}

#[test]
fn config_rejects_missing_connector() {
    let toml = VALID_CONFIG.replace("connector = \"uniswap\"", "connector = \"\"");

    let result = Config::parse_toml(&toml);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField { field: "connector" }))
    ));
}

#[test]
fn config_rejects_malformed_decimal() {
    let toml = VALID_CONFIG.replace("buy_quote = \"100\"", "buy_quote = \"one hundred\"");

    let result = Config::parse_toml(&toml);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn config_without_logging_section_uses_defaults() {
    let toml = VALID_CONFIG.replace("[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n", "");

    let config = Config::parse_toml(&toml).expect("parse config");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
}
