//! Network URL constants for the public market-data providers.

/// Default CoinGecko REST API base URL.
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

/// Default Binance REST API base URL.
pub const DEFAULT_BINANCE_URL: &str = "https://api.binance.com/api/v3";

/// Quote currency used for CoinGecko price queries.
pub const DEFAULT_VS_CURRENCY: &str = "usd";
