use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const VALID_CONFIG: &str = r#"
[logging]
level = "warn"
format = "pretty"

[arbitrage]
order_amount = "1"
min_profitability = "0.01"

[first_market]
connector = "binance"
trading_pair = "ETH-USDT"
buy_quote = "100"
sell_quote = "99"

[second_market]
connector = "uniswap"
trading_pair = "WETH-USDT"
buy_quote = "112"
sell_quote = "110"
"#;

/// Write `contents` to `config.toml` inside a fresh temporary directory.
///
/// The file is removed when the returned directory guard is dropped.
pub fn write_temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}
