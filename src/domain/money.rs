//! Monetary types for price and amount representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Order amount represented as a Decimal for precision.
pub type Amount = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_arithmetic_is_exact() {
        let price: Price = dec!(0.1);
        let amount: Amount = dec!(0.2);

        assert_eq!(price + amount, dec!(0.3));
    }
}
