//! Custom serde helpers for provider wire formats.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// A price as providers send it: Binance uses decimal strings, CoinGecko uses
/// JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LenientDecimal {
    Str(String),
    Int(i64),
    Float(f64),
}

impl LenientDecimal {
    pub fn to_decimal(&self) -> Result<Decimal, String> {
        match self {
            LenientDecimal::Str(s) => {
                Decimal::from_str(s.trim()).map_err(|e| format!("Invalid decimal {s:?}: {e}"))
            }
            LenientDecimal::Int(i) => Ok(Decimal::from(*i)),
            // f64 Display is the shortest round-tripping form, so 0.1 stays 0.1.
            LenientDecimal::Float(f) if f.is_finite() => Decimal::from_str(&f.to_string())
                .map_err(|e| format!("Invalid decimal {f}: {e}")),
            LenientDecimal::Float(f) => Err(format!("Non-finite price: {f}")),
        }
    }
}

/// Converts a provider millisecond timestamp into whole epoch seconds.
///
/// Uses floor division so pre-epoch values round towards negative infinity.
pub fn ms_to_secs(ms: i64) -> i64 {
    ms.div_euclid(1000)
}
