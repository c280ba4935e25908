//! Profit percentage with an explicit undefined state.
//!
//! `Decimal` has no NaN, so undefined profitability (a zero buy quote) is a
//! dedicated variant. Comparisons follow IEEE-754 NaN rules: an undefined
//! profit equals nothing, itself included, and is unordered against every
//! value.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Fractional profit of a proposal (e.g. `0.01` for 1%).
#[derive(Debug, Clone, Copy)]
pub enum ProfitPct {
    /// Profit computed with exact decimal arithmetic.
    Defined(Decimal),
    /// Profitability cannot be computed (NaN sentinel).
    Undefined,
}

impl ProfitPct {
    /// The NaN sentinel.
    pub const NAN: Self = Self::Undefined;

    /// True for the undefined sentinel.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// The decimal value, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Defined(value) => Some(*value),
            Self::Undefined => None,
        }
    }
}

impl From<Decimal> for ProfitPct {
    fn from(value: Decimal) -> Self {
        Self::Defined(value)
    }
}

impl PartialEq for ProfitPct {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<Decimal> for ProfitPct {
    fn eq(&self, other: &Decimal) -> bool {
        self.value().is_some_and(|value| value == *other)
    }
}

impl PartialOrd for ProfitPct {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Defined(a), Self::Defined(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl PartialOrd<Decimal> for ProfitPct {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        self.value().and_then(|value| value.partial_cmp(other))
    }
}

impl fmt::Display for ProfitPct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => write!(f, "{value}"),
            Self::Undefined => write!(f, "NaN"),
        }
    }
}

impl Serialize for ProfitPct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Defined(value) => Serialize::serialize(value, serializer),
            Self::Undefined => serializer.serialize_none(),
        }
    }
}
