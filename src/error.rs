//! Unified kit error types.

use thiserror::Error;

/// Top-level kit error.
#[derive(Error, Debug)]
pub enum KitError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while talking to a market-data provider.
///
/// The `Display` text of `Status` is what the chart shows in its error banner.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{provider} API error: {status_text}")]
    Status {
        provider: &'static str,
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("{provider} API error: Too Many Requests")]
    RateLimited { provider: &'static str },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    pub fn is_rate_limit(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Preference storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Drawing surface setup errors.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Drawing surface unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_uses_status_text() {
        let err = ProviderError::Status {
            provider: "CoinGecko",
            status: 404,
            status_text: "Not Found".to_string(),
            body: "{}".to_string(),
        };
        assert_eq!(err.to_string(), "CoinGecko API error: Not Found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_rate_limited_is_429() {
        let err = ProviderError::RateLimited { provider: "Binance" };
        assert!(err.is_rate_limit());
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_decode_has_no_status() {
        let err = ProviderError::Decode("bad kline".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_kit_error_from_provider() {
        let err: KitError = ProviderError::RateLimited { provider: "CoinGecko" }.into();
        assert!(matches!(err, KitError::Provider(_)));
    }

    #[test]
    fn test_kit_error_from_surface() {
        let err: KitError = SurfaceError::Unavailable("no 2d context".into()).into();
        assert_eq!(err.to_string(), "Surface error: Drawing surface unavailable: no 2d context");
    }
}
