//! # Apex Kit
//!
//! Market data client, price-chart controller and presentation models for the
//! Apex mobile trading design system. Works on native and WASM targets.
//!
//! ## Architecture
//!
//! The kit is organized in layers:
//!
//! 1. **Core**: ids, enums, series types, period tables, design tokens (always available, WASM-safe)
//! 2. **HTTP**: `MarketHttp`, GET-only with status-to-error mapping, no retries
//! 3. **Providers**: `MarketDataProvider` with CoinGecko and Binance implementations
//! 4. **Chart**: `ChartSurface` keeps a drawing surface in sync with asset/kind/period
//! 5. **UI**: closed-variant component models rendering to markup
//! 6. **Theme**: `ThemeService` over a preference store and a root attribute sink
//! 7. **High-Level Client**: `MarketClient` with provider sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apex_kit::prelude::*;
//!
//! let client = MarketClient::builder().build()?;
//!
//! let mut chart = ChartSurface::new(client.coingecko(), ChartConfig::default());
//! let surface = MemorySurface::new(&chart.options());
//! if let Some(ticket) = chart.mount(surface) {
//!     chart.complete(ticket).await;
//! }
//!
//! if let Some(ticket) = chart.set_period(Period::Day1) {
//!     chart.complete(ticket).await;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all modules.
pub mod shared;

/// Domain modules (vertical slices): series types, wire types, conversions, period tables.
pub mod domain;

/// Colour palettes, spacing and type ramp.
pub mod tokens;

/// Unified kit error types.
pub mod error;

/// Provider URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP client, one method per provider endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Providers ───────────────────────────────────────────────────────

/// `MarketDataProvider` and the CoinGecko / Binance sub-clients.
pub mod provider;

// ── Layer 4: Chart ───────────────────────────────────────────────────────────

/// Chart controller, drawing-surface seam and controls.
pub mod chart;

// ── Layer 5: UI ──────────────────────────────────────────────────────────────

/// Presentation components.
pub mod ui;

// ── Layer 6: Theme ───────────────────────────────────────────────────────────

/// Light/dark preference service.
pub mod theme;

// ── Layer 7: High-Level Client ───────────────────────────────────────────────

/// `MarketClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetSymbol, Period, ProviderId, SeriesKind};

    // Series + period tables
    pub use crate::domain::period::{day_range, kline_params, DayRange, KlineParams};
    pub use crate::domain::series::{Bar, Point, Series};

    // Errors
    pub use crate::error::{KitError, ProviderError, StorageError, SurfaceError};

    // Network
    pub use crate::network::{DEFAULT_BINANCE_URL, DEFAULT_COINGECKO_URL, DEFAULT_VS_CURRENCY};

    // Providers
    pub use crate::provider::MarketDataProvider;

    // Chart
    pub use crate::chart::{
        ChartConfig, ChartOptions, ChartPhase, ChartSurface, DrawingSurface, LoadOutcome,
        LoadTicket, MemorySurface, PeriodPills, SeriesStyle, TypeToggle,
    };
    #[cfg(feature = "web")]
    pub use crate::chart::CanvasSurface;

    // UI
    pub use crate::ui::{Component, Element};

    // Theme
    pub use crate::theme::{
        MemoryStore, PreferenceStore, SystemPreference, Theme, ThemeRoot, ThemeService,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{BinanceClient, CoinGeckoClient, MarketClient, MarketClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::MarketHttp;
}
