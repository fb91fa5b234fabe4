//! Shared newtypes and utilities used across all modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as the
//! short labels the UI and the host application use (`"BTC"`, `"1W"`, `"candle"`).

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ProviderId ──────────────────────────────────────────────────────────────

/// Provider-specific asset identifier (e.g. `"bitcoin"` on CoinGecko,
/// `"BTCUSDT"` on Binance).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for ProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ProviderId(s))
    }
}

// ─── AssetSymbol ─────────────────────────────────────────────────────────────

/// Supported cryptocurrencies and fiat badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetSymbol {
    Ada,
    Bch,
    #[default]
    Btc,
    Dash,
    Eth,
    Ltc,
    Miota,
    Usd,
    Xmr,
    Xrp,
    /// Alias of `Usd` for badge purposes.
    Usdt,
}

impl AssetSymbol {
    pub const ALL: [AssetSymbol; 11] = [
        Self::Ada,
        Self::Bch,
        Self::Btc,
        Self::Dash,
        Self::Eth,
        Self::Ltc,
        Self::Miota,
        Self::Usd,
        Self::Xmr,
        Self::Xrp,
        Self::Usdt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ada => "ADA",
            Self::Bch => "BCH",
            Self::Btc => "BTC",
            Self::Dash => "DASH",
            Self::Eth => "ETH",
            Self::Ltc => "LTC",
            Self::Miota => "MIOTA",
            Self::Usd => "USD",
            Self::Xmr => "XMR",
            Self::Xrp => "XRP",
            Self::Usdt => "USDT",
        }
    }

    /// The symbol whose badge artwork is shown for this asset.
    pub fn badge(&self) -> AssetSymbol {
        match self {
            Self::Usdt => Self::Usd,
            other => *other,
        }
    }
}

impl std::fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a ticker string is not one of the supported symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl std::fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown asset symbol: {}", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl FromStr for AssetSymbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AssetSymbol::ALL
            .into_iter()
            .find(|sym| sym.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSymbol(trimmed.to_string()))
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Human-facing chart time range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1H")]
    Hour1,
    #[serde(rename = "1D")]
    Day1,
    #[default]
    #[serde(rename = "1W")]
    Week1,
    #[serde(rename = "1M")]
    Month1,
    #[serde(rename = "1Y")]
    Year1,
    #[serde(rename = "All")]
    All,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; 6] = [
        Self::Hour1,
        Self::Day1,
        Self::Week1,
        Self::Month1,
        Self::Year1,
        Self::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour1 => "1H",
            Self::Day1 => "1D",
            Self::Week1 => "1W",
            Self::Month1 => "1M",
            Self::Year1 => "1Y",
            Self::All => "All",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Period::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── SeriesKind ──────────────────────────────────────────────────────────────

/// Which series (and rendering mode) a chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Candle,
    Area,
}

impl SeriesKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Candle => "Candle",
            Self::Area => "Area",
        }
    }
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
