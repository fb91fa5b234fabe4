//! Price chart: controller, drawing-surface seam, styling and controls.

#[cfg(feature = "web")]
pub mod canvas;
pub mod controller;
pub mod controls;
pub mod options;
pub mod plot;
pub mod surface;

pub use controller::{
    error_message, ChartConfig, ChartPhase, ChartSurface, LoadOutcome, LoadTicket,
    LOADING_TEXT, RATE_LIMIT_MESSAGE,
};
pub use controls::{PeriodPills, TypeToggle};
pub use options::{AreaStyle, CandleStyle, ChartOptions, SeriesStyle, DEFAULT_CHART_HEIGHT};
pub use plot::{PlotCandle, Viewport};
pub use surface::{DrawingSurface, MemorySurface, SeriesHandle, SurfaceCall};

#[cfg(feature = "web")]
pub use canvas::CanvasSurface;
