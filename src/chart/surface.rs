//! The drawing-library seam.
//!
//! A [`DrawingSurface`] is one chart instance bound to one on-screen
//! container. The controller is the only thing that talks to it.

use super::options::{ChartOptions, SeriesStyle};
use super::plot::Viewport;
use crate::domain::series::{Bar, Point, Series};
use crate::shared::SeriesKind;
use std::collections::BTreeMap;

/// Opaque id of a series added to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesHandle(pub u64);

pub trait DrawingSurface {
    fn add_series(&mut self, style: SeriesStyle) -> SeriesHandle;

    /// Unknown handles are ignored.
    fn remove_series(&mut self, handle: SeriesHandle);

    fn set_bars(&mut self, handle: SeriesHandle, bars: &[Bar]);

    fn set_points(&mut self, handle: SeriesHandle, points: &[Point]);

    /// Fits the time scale to the plotted data.
    fn fit_content(&mut self);

    fn resize(&mut self, width: u32);

    /// Frees the instance and its resize listener. Called exactly once.
    fn release(&mut self);
}

// ─── MemorySurface ───────────────────────────────────────────────────────────

/// One recorded call on a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Add(SeriesKind, SeriesHandle),
    Remove(SeriesHandle),
    SetBars(SeriesHandle, usize),
    SetPoints(SeriesHandle, usize),
    Fit,
    Resize(u32),
    Release,
}

#[derive(Debug, Clone)]
struct Plotted {
    style: SeriesStyle,
    data: Series,
}

/// Headless surface that records every call and keeps the plotted data.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    next_handle: u64,
    series: BTreeMap<SeriesHandle, Plotted>,
    calls: Vec<SurfaceCall>,
    viewport: Option<Viewport>,
    released: bool,
}

impl MemorySurface {
    pub fn new(options: &ChartOptions) -> Self {
        Self {
            width: options.width,
            height: options.height,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Data of the most recently added live series.
    pub fn plotted(&self) -> Option<&Series> {
        self.series.values().next_back().map(|p| &p.data)
    }

    pub fn plotted_style(&self) -> Option<&SeriesStyle> {
        self.series.values().next_back().map(|p| &p.style)
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// View computed by the last `fit_content`.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }
}

impl DrawingSurface for MemorySurface {
    fn add_series(&mut self, style: SeriesStyle) -> SeriesHandle {
        self.next_handle += 1;
        let handle = SeriesHandle(self.next_handle);
        let data = match style.kind() {
            SeriesKind::Candle => Series::Candle(Vec::new()),
            SeriesKind::Area => Series::Area(Vec::new()),
        };
        self.calls.push(SurfaceCall::Add(style.kind(), handle));
        self.series.insert(handle, Plotted { style, data });
        handle
    }

    fn remove_series(&mut self, handle: SeriesHandle) {
        self.calls.push(SurfaceCall::Remove(handle));
        self.series.remove(&handle);
    }

    fn set_bars(&mut self, handle: SeriesHandle, bars: &[Bar]) {
        self.calls.push(SurfaceCall::SetBars(handle, bars.len()));
        if let Some(p) = self.series.get_mut(&handle) {
            p.data = Series::Candle(bars.to_vec());
        }
    }

    fn set_points(&mut self, handle: SeriesHandle, points: &[Point]) {
        self.calls.push(SurfaceCall::SetPoints(handle, points.len()));
        if let Some(p) = self.series.get_mut(&handle) {
            p.data = Series::Area(points.to_vec());
        }
    }

    fn fit_content(&mut self) {
        self.calls.push(SurfaceCall::Fit);
        self.viewport = Viewport::fit(
            self.series.values().map(|p| &p.data),
            self.width as f64,
            self.height as f64,
        );
    }

    fn resize(&mut self, width: u32) {
        self.calls.push(SurfaceCall::Resize(width));
        self.width = width;
        self.viewport = self
            .viewport
            .map(|vp| vp.resized(width as f64, self.height as f64));
    }

    fn release(&mut self) {
        self.calls.push(SurfaceCall::Release);
        self.series.clear();
        self.viewport = None;
        self.released = true;
    }
}
