//! Chart engine facade consumed by host applications.
//!
//! The engine owns the candle series, the scroll/zoom view state, attached
//! indicators and drawings, and the last-computed view snapshot. Every
//! state-changing call performs a full synchronous redraw before returning;
//! there is no diffing, no partial redraw, and no incremental-append path —
//! a replay driver feeding a growing prefix through [`ChartEngine::set_data`]
//! gets a full recompute each time.

mod scene;
mod style;

pub use scene::{GRID_STEPS, PLACEHOLDER_TEXT};
pub use style::ChartStyle;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::view::{self, ViewState};
use crate::core::{Candle, Viewport};
use crate::drawing::{DrawingTool, SharedDrawing};
use crate::error::{ChartError, ChartResult};
use crate::indicator::{Indicator, IndicatorSample};
use crate::render::Renderer;

/// Read-only view-state snapshot recomputed by every render pass.
///
/// Hosts read it for overlays (price-scale labels, OHLC readouts) and the
/// interaction manager reads it to map pointer coordinates into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub min_price: f64,
    pub max_price: f64,
    pub start_index: usize,
    pub end_index: usize,
    pub scroll_offset: f64,
    pub zoom_level: f64,
}

struct AttachedIndicator {
    instance: Box<dyn Indicator>,
    samples: Vec<IndicatorSample>,
}

/// Main orchestration facade over a rendering backend.
///
/// Single-threaded by contract: all mutation and rendering happens on the
/// thread that owns the drawing surface, and calls are serialized by the
/// caller (pointer delivery plus the host's playback timer).
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    data: Vec<Candle>,
    view: ViewState,
    style: ChartStyle,
    indicators: Vec<AttachedIndicator>,
    drawings: Vec<SharedDrawing>,
    snapshot: ViewSnapshot,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine over a backend and surface size.
    ///
    /// An unusable surface is fatal here rather than recovered later.
    pub fn new(renderer: R, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let view = ViewState::default();
        let snapshot = ViewSnapshot {
            min_price: view::FALLBACK_PRICE_BOUNDS.min,
            max_price: view::FALLBACK_PRICE_BOUNDS.max,
            start_index: 0,
            end_index: 0,
            scroll_offset: view.scroll_offset(),
            zoom_level: view.zoom_level(),
        };

        Ok(Self {
            renderer,
            viewport,
            data: Vec::new(),
            view,
            style: ChartStyle::default(),
            indicators: Vec::new(),
            drawings: Vec::new(),
            snapshot,
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data(&self) -> &[Candle] {
        &self.data
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn view_snapshot(&self) -> ViewSnapshot {
        self.snapshot
    }

    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    #[must_use]
    pub fn drawing_count(&self) -> usize {
        self.drawings.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the candle series.
    ///
    /// View state survives the replacement, so a replay driver can feed a
    /// growing prefix without losing the user's scroll/zoom position. The
    /// series must already be ascending by time; an empty series is legal
    /// and renders a placeholder.
    pub fn set_data(&mut self, data: Vec<Candle>) -> ChartResult<()> {
        debug!(count = data.len(), "replace candle series");
        self.data = data;
        self.render()
    }

    /// Resizes the backing surface without touching view state.
    ///
    /// A zero dimension is lifted to one pixel instead of failing.
    pub fn set_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        trace!(width, height, "resize surface");
        self.viewport = Viewport::new(width.max(1), height.max(1));
        self.render()
    }

    /// Sets the candle slot width in pixels, clamped to the valid range.
    pub fn set_zoom(&mut self, level: f64) -> ChartResult<()> {
        self.view.set_zoom(level);
        trace!(zoom = self.view.zoom_level(), "set zoom");
        self.render()
    }

    /// Multiplies the current zoom level; the wheel-gesture entry point.
    pub fn zoom_by_factor(&mut self, factor: f64) -> ChartResult<()> {
        self.set_zoom(self.view.zoom_level() * factor)
    }

    /// Sets the scroll offset in candles from the right edge, clamped so
    /// the window stays inside the data.
    pub fn set_scroll(&mut self, offset: f64) -> ChartResult<()> {
        self.view
            .set_scroll(offset, self.data.len(), f64::from(self.viewport.width));
        trace!(scroll = self.view.scroll_offset(), "set scroll");
        self.render()
    }

    /// Shifts the visible window by a pixel delta; the drag-pan entry point.
    pub fn scroll_by_pixels(&mut self, delta_x: f64) -> ChartResult<()> {
        let candles_moved = delta_x / self.view.zoom_level();
        self.set_scroll(self.view.scroll_offset() + candles_moved)
    }

    /// Computes the indicator series synchronously and appends it.
    ///
    /// Repeated calls stack; call [`ChartEngine::clear_indicators`] first
    /// to replace instead.
    pub fn add_indicator(&mut self, indicator: Box<dyn Indicator>) -> ChartResult<()> {
        let samples = indicator.calculate(&self.data);
        debug!(
            name = indicator.name(),
            samples = samples.len(),
            "attach indicator"
        );
        self.indicators.push(AttachedIndicator {
            instance: indicator,
            samples,
        });
        self.render()
    }

    pub fn clear_indicators(&mut self) -> ChartResult<()> {
        debug!(count = self.indicators.len(), "clear indicators");
        self.indicators.clear();
        self.render()
    }

    pub fn add_drawing(&mut self, drawing: SharedDrawing) -> ChartResult<()> {
        debug!(name = drawing.borrow().name(), "attach drawing");
        self.drawings.push(drawing);
        self.render()
    }

    pub fn clear_drawings(&mut self) -> ChartResult<()> {
        debug!(count = self.drawings.len(), "clear drawings");
        self.drawings.clear();
        self.render()
    }

    /// Rebuilds and draws the whole scene.
    ///
    /// Every call recomputes the visible window and price bounds from
    /// scratch and repaints grid, candles, indicators, and drawings in that
    /// order. Calling it twice with no intervening state change produces
    /// the same snapshot and the same frame.
    pub fn render(&mut self) -> ChartResult<()> {
        self.snapshot = self.compute_snapshot();
        let frame = scene::build(self).flatten();
        self.renderer.render(&frame)
    }

    fn compute_snapshot(&self) -> ViewSnapshot {
        let range = view::visible_range(
            self.data.len(),
            self.view,
            f64::from(self.viewport.width),
        );
        let bounds = view::price_bounds(&self.data, range);

        ViewSnapshot {
            min_price: bounds.min,
            max_price: bounds.max,
            start_index: range.start_index,
            end_index: range.end_index,
            scroll_offset: self.view.scroll_offset(),
            zoom_level: self.view.zoom_level(),
        }
    }
}
