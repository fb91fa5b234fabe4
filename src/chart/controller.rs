//! Chart controller: keeps one drawing surface in sync with the current
//! (asset, kind, period) selection.
//!
//! A load cycle is split in three so a single-threaded host can interleave
//! overlapping loads without locks:
//!
//! 1. [`ChartSurface::request`] bumps the generation, removes the plotted
//!    series and enters `Loading`. It returns a [`LoadTicket`].
//! 2. [`ChartSurface::load`] fetches the latest price and then the series.
//!    It only borrows the provider.
//! 3. [`ChartSurface::apply`] plots the result, or shows the error. Outcomes
//!    whose generation is no longer the latest are dropped.
//!
//! [`ChartSurface::refresh`] runs the three steps back to back.

use super::controls::{PeriodPills, TypeToggle};
use super::options::{ChartOptions, SeriesStyle};
use super::surface::{DrawingSurface, SeriesHandle};
use crate::domain::series::Series;
use crate::error::ProviderError;
use crate::provider::MarketDataProvider;
use crate::shared::fmt::format_usd;
use crate::shared::{AssetSymbol, Period, ProviderId, SeriesKind};
use crate::ui::markup::Element;
use crate::ui::Component;
use rust_decimal::Decimal;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit reached. Please wait a moment and try again.";
pub const LOADING_TEXT: &str = "Loading chart data...";

/// Lifecycle of a chart instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartPhase {
    /// No drawing surface yet.
    Uninitialized,
    Idle,
    Loading,
    /// The last load failed. Only a new selection retries.
    Error(String),
    /// Terminal.
    Released,
}

/// Initial props of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub asset: AssetSymbol,
    pub kind: SeriesKind,
    pub period: Period,
    pub height: u32,
    pub show_type_toggle: bool,
    pub show_period_selector: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            asset: AssetSymbol::Btc,
            kind: SeriesKind::Candle,
            period: Period::Week1,
            height: super::options::DEFAULT_CHART_HEIGHT,
            show_type_toggle: true,
            show_period_selector: true,
        }
    }
}

/// One requested load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub id: ProviderId,
    pub kind: SeriesKind,
    pub period: Period,
}

/// Result of [`ChartSurface::load`], to be handed to [`ChartSurface::apply`].
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    /// Outer `None` when the price request itself failed.
    price: Option<Option<Decimal>>,
    pub result: Result<Series, ProviderError>,
}

impl LoadOutcome {
    pub fn generation(&self) -> u64 {
        self.ticket.generation
    }
}

/// Error banner text for a failed load.
pub fn error_message(err: &ProviderError) -> String {
    if err.is_rate_limit() {
        RATE_LIMIT_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

// ─── ChartSurface ────────────────────────────────────────────────────────────

pub struct ChartSurface<P: MarketDataProvider, D: DrawingSurface> {
    provider: P,
    surface: Option<D>,
    config: ChartConfig,
    phase: ChartPhase,
    generation: u64,
    series: Option<SeriesHandle>,
    price: Option<Decimal>,
}

impl<P: MarketDataProvider, D: DrawingSurface> ChartSurface<P, D> {
    pub fn new(provider: P, config: ChartConfig) -> Self {
        Self {
            provider,
            surface: None,
            config,
            phase: ChartPhase::Uninitialized,
            generation: 0,
            series: None,
            price: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn phase(&self) -> &ChartPhase {
        &self.phase
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn surface(&self) -> Option<&D> {
        self.surface.as_ref()
    }

    /// Host access to the bound surface, e.g. for DOM wiring. Series added
    /// or removed here are not tracked by the controller.
    pub fn surface_mut(&mut self) -> Option<&mut D> {
        self.surface.as_mut()
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(format_usd)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ChartPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ChartPhase::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Options for creating the drawing surface.
    pub fn options(&self) -> ChartOptions {
        ChartOptions::with_height(self.config.height)
    }

    fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Binds the drawing surface and requests the initial load.
    ///
    /// Ignored unless the chart is still uninitialized.
    pub fn mount(&mut self, surface: D) -> Option<LoadTicket> {
        if self.phase != ChartPhase::Uninitialized {
            tracing::warn!(phase = ?self.phase, "chart already mounted, ignoring mount");
            return None;
        }
        self.surface = Some(surface);
        self.phase = ChartPhase::Idle;
        self.request()
    }

    /// Releases the surface and returns it. Later outcomes are dropped.
    pub fn unmount(&mut self) -> Option<D> {
        let mut surface = self.surface.take()?;
        surface.release();
        self.series = None;
        self.phase = ChartPhase::Released;
        Some(surface)
    }

    /// Window resize. Ignored while unmounted.
    pub fn resize(&mut self, width: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width);
        }
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Changes the series kind. A new load is requested only on change.
    pub fn set_kind(&mut self, kind: SeriesKind) -> Option<LoadTicket> {
        if self.config.kind == kind {
            return None;
        }
        self.config.kind = kind;
        self.request()
    }

    pub fn set_period(&mut self, period: Period) -> Option<LoadTicket> {
        if self.config.period == period {
            return None;
        }
        self.config.period = period;
        self.request()
    }

    pub fn set_asset(&mut self, asset: AssetSymbol) -> Option<LoadTicket> {
        if self.config.asset == asset {
            return None;
        }
        self.config.asset = asset;
        self.request()
    }

    pub fn type_toggle(&self) -> TypeToggle {
        TypeToggle::new(self.config.kind)
    }

    pub fn period_pills(&self) -> PeriodPills {
        PeriodPills::new(self.config.period)
    }

    // ── Load cycle ───────────────────────────────────────────────────────

    /// Starts a load for the current selection.
    ///
    /// Removes the plotted series and enters `Loading`. `None` while
    /// unmounted.
    pub fn request(&mut self) -> Option<LoadTicket> {
        let surface = self.surface.as_mut()?;
        if let Some(handle) = self.series.take() {
            surface.remove_series(handle);
        }

        self.generation += 1;
        self.phase = ChartPhase::Loading;

        let id = self.provider.provider_id(self.config.asset);
        tracing::debug!(
            provider = self.provider.name(),
            asset = %self.config.asset,
            id = %id,
            kind = %self.config.kind,
            period = %self.config.period,
            generation = self.generation,
            "requesting chart data"
        );

        Some(LoadTicket {
            generation: self.generation,
            id,
            kind: self.config.kind,
            period: self.config.period,
        })
    }

    /// Fetches the latest price, then the series.
    ///
    /// A failed price request skips the series request.
    pub async fn load(provider: &P, ticket: LoadTicket) -> LoadOutcome {
        let price = match provider.latest_price(&ticket.id).await {
            Ok(price) => price,
            Err(err) => {
                return LoadOutcome {
                    ticket,
                    price: None,
                    result: Err(err),
                }
            }
        };
        let result = provider
            .fetch_series(&ticket.id, ticket.kind, ticket.period)
            .await;
        LoadOutcome {
            ticket,
            price: Some(price),
            result,
        }
    }

    /// Applies a finished load. Returns `false` when the outcome was stale
    /// or the chart is no longer mounted.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.generation() != self.generation {
            tracing::warn!(
                stale = outcome.generation(),
                latest = self.generation,
                "discarding stale chart data"
            );
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(generation = outcome.generation(), "chart unmounted, dropping load");
            return false;
        };

        if let Some(price) = outcome.price {
            self.price = price;
        }

        match outcome.result {
            Ok(series) => {
                let handle = surface.add_series(SeriesStyle::for_kind(series.kind()));
                match &series {
                    Series::Candle(bars) => surface.set_bars(handle, bars),
                    Series::Area(points) => surface.set_points(handle, points),
                }
                surface.fit_content();
                self.series = Some(handle);
                self.phase = ChartPhase::Idle;
                tracing::debug!(
                    kind = %series.kind(),
                    count = series.len(),
                    "chart data loaded"
                );
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    provider = self.provider.name(),
                    "failed to load chart data"
                );
                self.phase = ChartPhase::Error(error_message(&err));
            }
        }
        true
    }

    /// Loads and applies `ticket`.
    pub async fn complete(&mut self, ticket: LoadTicket) -> &ChartPhase {
        let outcome = Self::load(&self.provider, ticket).await;
        self.apply(outcome);
        &self.phase
    }

    /// Runs a full load cycle for the current selection.
    pub async fn refresh(&mut self) -> &ChartPhase {
        if let Some(ticket) = self.request() {
            let outcome = Self::load(&self.provider, ticket).await;
            self.apply(outcome);
        }
        &self.phase
    }
}

impl<P: MarketDataProvider, D: DrawingSurface> Drop for ChartSurface<P, D> {
    fn drop(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
    }
}

impl<P: MarketDataProvider, D: DrawingSurface> Component for ChartSurface<P, D> {
    fn render(&self) -> Element {
        let header = Element::new("div")
            .class("crypto-chart__header")
            .child(Element::new("h2").class("crypto-chart__title").text("Charts"))
            .child_opt(
                self.config
                    .show_type_toggle
                    .then(|| self.type_toggle().render()),
            );

        let container = Element::new("div")
            .class("crypto-chart__container")
            .attr("style", format!("height: {}px", self.config.height))
            .child_opt(
                self.is_loading()
                    .then(|| Element::new("div").class("crypto-chart__loading").text(LOADING_TEXT)),
            )
            .child_opt(
                self.error()
                    .map(|msg| Element::new("div").class("crypto-chart__error").text(msg)),
            );

        Element::new("div")
            .class("crypto-chart")
            .class_if(!self.is_mounted(), "crypto-chart--unmounted")
            .child(header)
            .child_opt(
                self.formatted_price()
                    .map(|p| Element::new("div").class("crypto-chart__price").text(p)),
            )
            .child(container)
            .child_opt(
                self.config
                    .show_period_selector
                    .then(|| self.period_pills().render()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{MemorySurface, SurfaceCall};
    use crate::domain::series::{Bar, Point};
    use std::str::FromStr;

    struct Canned {
        price: Option<Decimal>,
        fail_status: Option<u16>,
    }

    impl MarketDataProvider for Canned {
        fn name(&self) -> &'static str {
            "Canned"
        }

        fn resolve_provider_id(&self, symbol: &str) -> ProviderId {
            ProviderId::new(symbol.to_lowercase())
        }

        async fn fetch_scalar_series(
            &self,
            _id: &ProviderId,
            _period: Period,
        ) -> Result<Vec<Point>, ProviderError> {
            Ok(vec![Point { time: 1, value: Decimal::ONE }])
        }

        async fn fetch_bar_series(
            &self,
            _id: &ProviderId,
            _period: Period,
        ) -> Result<Vec<Bar>, ProviderError> {
            match self.fail_status {
                Some(status) => Err(ProviderError::Status {
                    provider: "Canned",
                    status,
                    status_text: "Internal Server Error".to_string(),
                    body: String::new(),
                }),
                None => Ok(vec![Bar::flat(1, Decimal::ONE), Bar::flat(2, Decimal::TWO)]),
            }
        }

        async fn latest_price(&self, _id: &ProviderId) -> Result<Option<Decimal>, ProviderError> {
            Ok(self.price)
        }
    }

    fn chart(fail_status: Option<u16>) -> ChartSurface<Canned, MemorySurface> {
        let provider = Canned {
            price: Decimal::from_str("67012.5").ok(),
            fail_status,
        };
        ChartSurface::new(provider, ChartConfig::default())
    }

    #[test]
    fn test_request_before_mount_is_none() {
        let mut c = chart(None);
        assert!(c.request().is_none());
        assert_eq!(c.phase(), &ChartPhase::Uninitialized);
    }

    #[tokio::test]
    async fn test_mount_and_load() {
        let mut c = chart(None);
        let opts = c.options();
        let ticket = c.mount(MemorySurface::new(&opts)).unwrap();
        assert_eq!(ticket.id.as_str(), "btc");
        assert!(c.is_loading());
        assert_eq!(c.complete(ticket).await, &ChartPhase::Idle);
        assert_eq!(c.formatted_price().as_deref(), Some("$67,012.50"));
        assert_eq!(c.surface().unwrap().plotted().map(Series::len), Some(2));
    }

    #[tokio::test]
    async fn test_status_error_surfaces_display_text() {
        let mut c = chart(Some(500));
        let ticket = c.mount(MemorySurface::default()).unwrap();
        c.complete(ticket).await;
        assert_eq!(c.error(), Some("Canned API error: Internal Server Error"));
        // Price arrived before the series failed.
        assert!(c.price().is_some());
    }

    #[tokio::test]
    async fn test_stale_outcome_is_dropped() {
        let mut c = chart(None);
        let first = c.mount(MemorySurface::default()).unwrap();
        let second = c.set_kind(SeriesKind::Area).unwrap();

        let stale = ChartSurface::<Canned, MemorySurface>::load(c.provider(), first).await;
        assert!(!c.apply(stale));
        assert!(c.is_loading());

        let fresh = ChartSurface::<Canned, MemorySurface>::load(c.provider(), second).await;
        assert!(c.apply(fresh));
        assert_eq!(c.surface().unwrap().series_count(), 1);
        assert!(matches!(c.surface().unwrap().plotted(), Some(Series::Area(_))));
    }

    #[tokio::test]
    async fn test_unchanged_selection_requests_nothing() {
        let mut c = chart(None);
        let ticket = c.mount(MemorySurface::default()).unwrap();
        c.complete(ticket).await;
        assert!(c.set_period(Period::Week1).is_none());
        assert!(c.set_kind(SeriesKind::Candle).is_none());
        assert!(c.set_asset(AssetSymbol::Btc).is_none());
    }

    #[tokio::test]
    async fn test_unmount_releases_and_drops_late_results() {
        let mut c = chart(None);
        let ticket = c.mount(MemorySurface::default()).unwrap();
        let outcome = ChartSurface::<Canned, MemorySurface>::load(c.provider(), ticket).await;
        let surface = c.unmount().unwrap();
        assert!(surface.is_released());
        assert_eq!(c.phase(), &ChartPhase::Released);
        assert!(!c.apply(outcome));
        assert!(c.request().is_none());
        c.resize(300);
        assert!(c.unmount().is_none());
    }

    #[tokio::test]
    async fn test_resize_forwards_while_mounted() {
        let mut c = chart(None);
        c.mount(MemorySurface::default());
        c.resize(320);
        let surface = c.surface().unwrap();
        assert_eq!(surface.width(), 320);
        assert!(surface.calls().contains(&SurfaceCall::Resize(320)));
    }

    #[test]
    fn test_render_states() {
        let mut c = chart(None);
        c.mount(MemorySurface::default());
        let el = c.render();
        assert_eq!(
            el.find("crypto-chart__loading").unwrap().text_content(),
            LOADING_TEXT
        );
        assert!(el.find("crypto-chart__price").is_none());
        assert_eq!(
            el.find("crypto-chart__container").unwrap().attr_value("style"),
            Some("height: 240px")
        );
        assert_eq!(el.find_all("pill-tabs__tab").len(), 6);
        assert_eq!(
            el.find("type-selector__tab--active").unwrap().text_content(),
            "Candle"
        );
    }

    #[test]
    fn test_rate_limit_message() {
        let err = ProviderError::RateLimited { provider: "CoinGecko" };
        assert_eq!(error_message(&err), RATE_LIMIT_MESSAGE);
    }
}
