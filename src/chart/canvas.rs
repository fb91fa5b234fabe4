//! `<canvas>` drawing surface for the browser.
//!
//! Draws through `CanvasRenderingContext2d`. The canvas follows its
//! container's width through a window `resize` listener, which is detached
//! again on [`DrawingSurface::release`].

use super::options::{AreaStyle, CandleStyle, ChartOptions, SeriesStyle};
use super::plot::{PlotCandle, Viewport};
use super::surface::{DrawingSurface, SeriesHandle};
use crate::domain::series::{Bar, Point, Series};
use crate::error::SurfaceError;
use crate::shared::SeriesKind;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

fn js_err(e: JsValue) -> SurfaceError {
    SurfaceError::Unavailable(format!("{e:?}"))
}

/// Canvas, context and everything needed to redraw a frame.
struct Frame {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    background: &'static str,
    series: BTreeMap<SeriesHandle, (SeriesStyle, Series)>,
    viewport: Option<Viewport>,
}

impl Frame {
    fn resize(&mut self, width: u32) {
        self.width = width;
        self.canvas.set_width(width);
        self.viewport = self
            .viewport
            .map(|vp| vp.resized(width as f64, self.height as f64));
        self.draw();
    }

    fn fit(&mut self) {
        self.viewport = Viewport::fit(
            self.series.values().map(|(_, data)| data),
            self.width as f64,
            self.height as f64,
        );
        self.draw();
    }

    fn draw(&self) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(self.background);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        let Some(vp) = self.viewport else {
            return;
        };
        for (style, data) in self.series.values() {
            match (style, data) {
                (SeriesStyle::Candle(style), Series::Candle(bars)) => {
                    self.draw_candles(&vp.candles(bars), style)
                }
                (SeriesStyle::Area(style), Series::Area(points)) => {
                    self.draw_area(&vp.line(points), style)
                }
                (style, data) => tracing::warn!(
                    style = %style.kind(),
                    data = %data.kind(),
                    "series data does not match its style, skipping"
                ),
            }
        }
    }

    fn draw_candles(&self, candles: &[PlotCandle], style: &CandleStyle) {
        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        for c in candles {
            let (body, border, wick) = if c.up {
                (style.up_color, style.border_up_color, style.wick_up_color)
            } else {
                (style.down_color, style.border_down_color, style.wick_down_color)
            };

            ctx.set_stroke_style_str(wick);
            ctx.begin_path();
            ctx.move_to(c.x, c.y_high);
            ctx.line_to(c.x, c.y_low);
            ctx.stroke();

            let top = c.y_open.min(c.y_close);
            let body_height = (c.y_open - c.y_close).abs().max(1.0);
            let left = c.x - c.half_width;
            ctx.set_fill_style_str(body);
            ctx.fill_rect(left, top, c.half_width * 2.0, body_height);
            ctx.set_stroke_style_str(border);
            ctx.stroke_rect(left, top, c.half_width * 2.0, body_height);
        }
    }

    fn draw_area(&self, line: &[(f64, f64)], style: &AreaStyle) {
        let (Some(first), Some(last)) = (line.first(), line.last()) else {
            return;
        };
        let ctx = &self.ctx;
        let bottom = self.height as f64;

        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, bottom);
        let stops = gradient
            .add_color_stop(0.0, &style.top_color)
            .and_then(|_| gradient.add_color_stop(1.0, &style.bottom_color));
        match stops {
            Ok(()) => ctx.set_fill_style_canvas_gradient(&gradient),
            Err(e) => {
                tracing::warn!("Invalid area gradient colour: {:?}", e);
                ctx.set_fill_style_str(&style.bottom_color);
            }
        }

        ctx.begin_path();
        ctx.move_to(first.0, bottom);
        for &(x, y) in line {
            ctx.line_to(x, y);
        }
        ctx.line_to(last.0, bottom);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(style.line_color);
        ctx.set_line_width(style.line_width as f64);
        ctx.begin_path();
        ctx.move_to(first.0, first.1);
        for &(x, y) in &line[1..] {
            ctx.line_to(x, y);
        }
        ctx.stroke();
    }
}

/// A chart drawn on a `<canvas>` appended to a container element.
pub struct CanvasSurface {
    frame: Rc<RefCell<Frame>>,
    next_handle: u64,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl CanvasSurface {
    /// Creates a canvas inside `container` and starts tracking its width.
    ///
    /// A zero `options.width` means the container's current width.
    pub fn attach(container: &Element, options: &ChartOptions) -> Result<Self, SurfaceError> {
        let window =
            web_sys::window().ok_or_else(|| SurfaceError::Unavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SurfaceError::Unavailable("no document".into()))?;

        let canvas = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Unavailable("not a canvas element".into()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| SurfaceError::Unavailable("no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable("unexpected 2d context type".into()))?;

        let width = if options.width > 0 {
            options.width
        } else {
            container.client_width().max(0) as u32
        };
        canvas.set_width(width);
        canvas.set_height(options.height);
        canvas.set_class_name("crypto-chart__canvas");
        container.append_child(&canvas).map_err(js_err)?;

        let frame = Rc::new(RefCell::new(Frame {
            canvas,
            ctx,
            width,
            height: options.height,
            background: options.background,
            series: BTreeMap::new(),
            viewport: None,
        }));
        frame.borrow().draw();

        let on_resize = {
            let frame = Rc::clone(&frame);
            let container = container.clone();
            Closure::<dyn FnMut()>::wrap(Box::new(move || {
                let width = container.client_width().max(0) as u32;
                match frame.try_borrow_mut() {
                    Ok(mut frame) if frame.width != width => frame.resize(width),
                    Ok(_) => {}
                    Err(_) => tracing::debug!("chart busy, skipping resize"),
                }
            }))
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(js_err)?;

        tracing::debug!(width, height = options.height, "canvas chart attached");
        Ok(Self {
            frame,
            next_handle: 0,
            on_resize: Some(on_resize),
        })
    }

    pub fn canvas(&self) -> HtmlCanvasElement {
        self.frame.borrow().canvas.clone()
    }

    pub fn is_released(&self) -> bool {
        self.on_resize.is_none()
    }

    fn with_frame(&self, f: impl FnOnce(&mut Frame)) {
        match self.frame.try_borrow_mut() {
            Ok(mut frame) => f(&mut frame),
            Err(_) => tracing::warn!("chart frame already borrowed, dropping draw call"),
        }
    }

    fn detach(&mut self) {
        let Some(on_resize) = self.on_resize.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove resize listener: {:?}", e);
            }
        }
        self.with_frame(|frame| {
            frame.series.clear();
            frame.viewport = None;
            frame.canvas.remove();
        });
    }
}

impl DrawingSurface for CanvasSurface {
    fn add_series(&mut self, style: SeriesStyle) -> SeriesHandle {
        self.next_handle += 1;
        let handle = SeriesHandle(self.next_handle);
        let data = match style.kind() {
            SeriesKind::Candle => Series::Candle(Vec::new()),
            SeriesKind::Area => Series::Area(Vec::new()),
        };
        self.with_frame(|frame| {
            frame.series.insert(handle, (style, data));
        });
        handle
    }

    fn remove_series(&mut self, handle: SeriesHandle) {
        self.with_frame(|frame| {
            if frame.series.remove(&handle).is_some() {
                frame.draw();
            }
        });
    }

    fn set_bars(&mut self, handle: SeriesHandle, bars: &[Bar]) {
        self.with_frame(|frame| {
            if let Some((_, data)) = frame.series.get_mut(&handle) {
                *data = Series::Candle(bars.to_vec());
                frame.draw();
            }
        });
    }

    fn set_points(&mut self, handle: SeriesHandle, points: &[Point]) {
        self.with_frame(|frame| {
            if let Some((_, data)) = frame.series.get_mut(&handle) {
                *data = Series::Area(points.to_vec());
                frame.draw();
            }
        });
    }

    fn fit_content(&mut self) {
        self.with_frame(Frame::fit);
    }

    fn resize(&mut self, width: u32) {
        self.with_frame(|frame| frame.resize(width));
    }

    fn release(&mut self) {
        self.detach();
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        self.detach();
    }
}
