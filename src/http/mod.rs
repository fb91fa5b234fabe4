//! HTTP client layer: `MarketHttp`, GET-only with status-to-error mapping.

pub mod client;

pub use client::MarketHttp;
