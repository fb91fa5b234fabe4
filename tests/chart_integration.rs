//! Integration tests for the chart load cycle.
//!
//! A scripted provider stands in for the network and a `MemorySurface`
//! records every drawing call, so the full
//! mount → request → load → apply → unmount lifecycle runs offline.

use std::str::FromStr;
use std::sync::Mutex;

use rust_decimal::Decimal;

use apex_kit::chart::{
    ChartConfig, ChartPhase, ChartSurface, MemorySurface, SurfaceCall, RATE_LIMIT_MESSAGE,
};
use apex_kit::domain::period::{kline_params, KlineParams};
use apex_kit::domain::series::{Bar, Point, Series};
use apex_kit::error::ProviderError;
use apex_kit::provider::MarketDataProvider;
use apex_kit::shared::{AssetSymbol, Period, ProviderId, SeriesKind};
use apex_kit::ui::Component;

/// What the scripted provider answers with.
#[derive(Clone)]
enum Script {
    Bars(usize),
    RateLimited,
    Status(u16, &'static str),
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Price(String),
    Bars(String, KlineParams),
    Points(String, KlineParams),
}

struct ScriptedProvider {
    script: Script,
    price: Option<Decimal>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedProvider {
    fn new(script: Script) -> Self {
        Self {
            script,
            price: Decimal::from_str("67012.5").ok(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn error(&self) -> Option<ProviderError> {
        match self.script {
            Script::Bars(_) => None,
            Script::RateLimited => Some(ProviderError::RateLimited { provider: "Scripted" }),
            Script::Status(status, text) => Some(ProviderError::Status {
                provider: "Scripted",
                status,
                status_text: text.to_string(),
                body: String::new(),
            }),
        }
    }

    fn bars(&self) -> Vec<Bar> {
        let n = match self.script {
            Script::Bars(n) => n,
            _ => 0,
        };
        (0..n)
            .map(|i| {
                let close = Decimal::from(100 + i as i64);
                Bar {
                    time: 1_700_000_000 + 3600 * i as i64,
                    open: close - Decimal::ONE,
                    high: close + Decimal::ONE,
                    low: close - Decimal::TWO,
                    close,
                }
            })
            .collect()
    }
}

impl MarketDataProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn resolve_provider_id(&self, symbol: &str) -> ProviderId {
        ProviderId::new(format!("{}USDT", symbol.to_uppercase()))
    }

    async fn fetch_scalar_series(
        &self,
        id: &ProviderId,
        period: Period,
    ) -> Result<Vec<Point>, ProviderError> {
        self.record(Call::Points(id.to_string(), kline_params(period)));
        if let Some(err) = self.error() {
            return Err(err);
        }
        Ok(self.bars().into_iter().map(Point::from).collect())
    }

    async fn fetch_bar_series(
        &self,
        id: &ProviderId,
        period: Period,
    ) -> Result<Vec<Bar>, ProviderError> {
        self.record(Call::Bars(id.to_string(), kline_params(period)));
        if let Some(err) = self.error() {
            return Err(err);
        }
        Ok(self.bars())
    }

    async fn latest_price(&self, id: &ProviderId) -> Result<Option<Decimal>, ProviderError> {
        self.record(Call::Price(id.to_string()));
        Ok(self.price)
    }
}

type Chart = ChartSurface<ScriptedProvider, MemorySurface>;

fn new_chart(script: Script) -> Chart {
    ChartSurface::new(ScriptedProvider::new(script), ChartConfig::default())
}

async fn mounted(script: Script) -> Chart {
    let mut chart = new_chart(script);
    let surface = MemorySurface::new(&chart.options());
    let ticket = chart.mount(surface).expect("mount should request a load");
    chart.complete(ticket).await;
    chart
}

fn plotted(chart: &Chart) -> Series {
    chart
        .surface()
        .and_then(|s| s.plotted())
        .cloned()
        .expect("a series should be plotted")
}

#[tokio::test]
async fn test_candle_default_load() {
    let chart = mounted(Script::Bars(168)).await;

    assert_eq!(chart.phase(), &ChartPhase::Idle);
    let series = plotted(&chart);
    assert_eq!(series.kind(), SeriesKind::Candle);
    assert_eq!(series.len(), 168);

    let el = chart.render();
    assert_eq!(
        el.find("crypto-chart__price").unwrap().text_content(),
        "$67,012.50"
    );
    assert!(el.find("crypto-chart__loading").is_none());
    assert!(el.find("crypto-chart__error").is_none());

    assert_eq!(
        chart.provider().calls(),
        [
            Call::Price("BTCUSDT".into()),
            Call::Bars("BTCUSDT".into(), kline_params(Period::Week1)),
        ]
    );
    let calls = chart.surface().unwrap().calls();
    assert!(matches!(calls.last(), Some(SurfaceCall::Fit)));

    let view = chart.surface().unwrap().viewport().copied().expect("view fitted after load");
    assert_eq!(Some((view.time_start, view.time_end)), series.time_range());
    assert!(view.value_min < view.value_max);
}

#[tokio::test]
async fn test_resize_keeps_fitted_view() {
    let mut chart = mounted(Script::Bars(24)).await;
    let fitted = *chart.surface().unwrap().viewport().unwrap();

    chart.resize(840);

    let surface = chart.surface().unwrap();
    assert_eq!(surface.calls().last(), Some(&SurfaceCall::Resize(840)));
    assert_eq!(surface.width(), 840);
    let view = surface.viewport().unwrap();
    assert_eq!(view.width, 840.0);
    assert_eq!(view.time_start, fitted.time_start);
    assert_eq!(view.value_max, fitted.value_max);
}

#[tokio::test]
async fn test_rate_limit_shows_friendly_message() {
    let chart = mounted(Script::RateLimited).await;

    assert_eq!(chart.phase(), &ChartPhase::Error(RATE_LIMIT_MESSAGE.to_string()));
    let el = chart.render();
    assert_eq!(
        el.find("crypto-chart__error").unwrap().text_content(),
        RATE_LIMIT_MESSAGE
    );
    assert!(!el.to_html().contains("Too Many Requests"));
    assert_eq!(chart.surface().unwrap().series_count(), 0);
}

#[tokio::test]
async fn test_other_errors_show_status_text() {
    let chart = mounted(Script::Status(503, "Service Unavailable")).await;
    assert_eq!(chart.error(), Some("Scripted API error: Service Unavailable"));
    assert!(!chart.is_loading());
}

#[tokio::test]
async fn test_period_switch_runs_one_cycle() {
    let mut chart = mounted(Script::Bars(10)).await;
    let calls_before = chart.provider().calls().len();
    let old_handle = match chart.surface().unwrap().calls().first() {
        Some(SurfaceCall::Add(_, handle)) => *handle,
        other => panic!("expected the initial series add, got {other:?}"),
    };
    chart.surface_mut().unwrap().clear_calls();

    let ticket = chart.set_period(Period::Day1).expect("period change should request");
    assert_eq!(chart.phase(), &ChartPhase::Loading);
    chart.complete(ticket).await;

    let new_calls = chart.provider().calls().split_off(calls_before);
    assert_eq!(
        new_calls,
        [
            Call::Price("BTCUSDT".into()),
            Call::Bars(
                "BTCUSDT".into(),
                KlineParams {
                    interval: "5m",
                    limit: 288
                }
            ),
        ]
    );

    let calls = chart.surface().unwrap().calls();
    let new_handle = match calls.get(1) {
        Some(SurfaceCall::Add(SeriesKind::Candle, handle)) => *handle,
        other => panic!("expected a candle series add, got {other:?}"),
    };
    assert_eq!(
        calls,
        [
            SurfaceCall::Remove(old_handle),
            SurfaceCall::Add(SeriesKind::Candle, new_handle),
            SurfaceCall::SetBars(new_handle, 10),
            SurfaceCall::Fit,
        ]
    );
    assert_eq!(chart.surface().unwrap().series_count(), 1);
    assert_eq!(chart.phase(), &ChartPhase::Idle);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let mut chart = mounted(Script::Bars(24)).await;
    let first = plotted(&chart);

    chart.refresh().await;
    let second = plotted(&chart);

    assert_eq!(first, second);
    assert_eq!(chart.surface().unwrap().series_count(), 1);
}

#[tokio::test]
async fn test_empty_response_is_not_an_error() {
    let chart = mounted(Script::Bars(0)).await;

    assert_eq!(chart.phase(), &ChartPhase::Idle);
    assert!(plotted(&chart).is_empty());
}

#[tokio::test]
async fn test_area_switch_plots_points() {
    let mut chart = mounted(Script::Bars(5)).await;

    let ticket = chart.set_kind(SeriesKind::Area).unwrap();
    chart.complete(ticket).await;

    match plotted(&chart) {
        Series::Area(points) => {
            assert_eq!(points.len(), 5);
            assert_eq!(points[0].value, Decimal::from(100));
        }
        other => panic!("expected an area series, got {other:?}"),
    }
    assert_eq!(
        chart.render().find("type-selector__tab--active").unwrap().text_content(),
        "Area"
    );
}

#[tokio::test]
async fn test_latest_request_wins() {
    let mut chart = new_chart(Script::Bars(3));
    let opts = chart.options();
    let first = chart.mount(MemorySurface::new(&opts)).unwrap();
    let second = chart.set_asset(AssetSymbol::Eth).unwrap();
    assert!(second.generation > first.generation);

    // The newer load resolves first.
    let newer = Chart::load(chart.provider(), second).await;
    let older = Chart::load(chart.provider(), first).await;

    assert!(chart.apply(newer));
    assert!(!chart.apply(older));
    assert_eq!(chart.phase(), &ChartPhase::Idle);
    assert_eq!(chart.surface().unwrap().series_count(), 1);
}

#[tokio::test]
async fn test_unmount_is_terminal() {
    let mut chart = mounted(Script::Bars(3)).await;

    let surface = chart.unmount().expect("mounted chart has a surface");
    assert!(surface.is_released());
    assert_eq!(surface.calls().last(), Some(&SurfaceCall::Release));
    assert_eq!(chart.phase(), &ChartPhase::Released);

    assert!(chart.set_period(Period::All).is_none());
    assert_eq!(chart.refresh().await, &ChartPhase::Released);
}
