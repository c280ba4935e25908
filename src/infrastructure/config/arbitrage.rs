//! Arbitrage evaluation configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::application::proposal::SlippageBuffers;
use crate::error::{ConfigError, Result};

/// Order sizing, profitability threshold and slippage allowances.
#[derive(Debug, Clone, Deserialize)]
pub struct ArbitrageConfig {
    /// Amount of the base asset traded on each leg.
    pub order_amount: Decimal,
    /// Minimum profit (e.g. 0.003 = 0.3%) for a proposal to be reported.
    #[serde(default = "default_min_profitability")]
    pub min_profitability: Decimal,
    /// Slippage allowance on the first market (e.g. 0.01 = 1%).
    #[serde(default)]
    pub first_market_slippage_buffer: Decimal,
    /// Slippage allowance on the second market.
    #[serde(default)]
    pub second_market_slippage_buffer: Decimal,
}

fn default_min_profitability() -> Decimal {
    dec!(0.003)
}

impl ArbitrageConfig {
    /// Buffers to apply when building proposals.
    #[must_use]
    pub const fn slippage_buffers(&self) -> SlippageBuffers {
        SlippageBuffers {
            first: self.first_market_slippage_buffer,
            second: self.second_market_slippage_buffer,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.order_amount <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "order_amount",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let buffers = [
            ("first_market_slippage_buffer", self.first_market_slippage_buffer),
            ("second_market_slippage_buffer", self.second_market_slippage_buffer),
        ];
        for (field, buffer) in buffers {
            if buffer < Decimal::ZERO || buffer >= Decimal::ONE {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be 0 or greater and less than 1".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn config(amount: Decimal, first: Decimal, second: Decimal) -> ArbitrageConfig {
        ArbitrageConfig {
            order_amount: amount,
            min_profitability: default_min_profitability(),
            first_market_slippage_buffer: first,
            second_market_slippage_buffer: second,
        }
    }

    #[test]
    fn defaults_apply_when_fields_absent() {
        let config: ArbitrageConfig = toml::from_str("order_amount = \"2\"").unwrap();
        assert_eq!(config.order_amount, dec!(2));
        assert_eq!(config.min_profitability, dec!(0.003));
        assert_eq!(config.slippage_buffers(), SlippageBuffers::default());
    }

    #[test]
    fn validate_accepts_sane_values() {
        assert!(config(dec!(1), dec!(0), dec!(0.05)).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let result = config(dec!(0), dec!(0), dec!(0)).validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "order_amount",
                ..
            }))
        ));
    }

    #[test]
    fn validate_rejects_buffer_of_one() {
        let result = config(dec!(1), dec!(0), dec!(1)).validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "second_market_slippage_buffer",
                ..
            }))
        ));
    }

    #[test]
    fn validate_rejects_negative_buffer() {
        let result = config(dec!(1), dec!(-0.1), dec!(0)).validate();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "first_market_slippage_buffer",
                ..
            }))
        ));
    }
}
