use serde::{Deserialize, Serialize};

use crate::core::coords::DEFAULT_PRICE_PADDING_PX;
use crate::core::types::Candle;

/// Smallest candle slot width in pixels.
pub const ZOOM_MIN: f64 = 1.0;
/// Largest candle slot width in pixels.
pub const ZOOM_MAX: f64 = 100.0;

/// Scroll/zoom state of the visible candle window.
///
/// `scroll_offset` counts candles from the right edge of the data;
/// `zoom_level` is the pixel width of one candle slot. Both survive data
/// replacement — only an explicit caller action resets them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    scroll_offset: f64,
    zoom_level: f64,
    padding: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            zoom_level: 10.0,
            padding: DEFAULT_PRICE_PADDING_PX,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn scroll_offset(self) -> f64 {
        self.scroll_offset
    }

    #[must_use]
    pub fn zoom_level(self) -> f64 {
        self.zoom_level
    }

    /// Vertical padding of the price scale, in pixels.
    #[must_use]
    pub fn padding(self) -> f64 {
        self.padding
    }

    /// Clamps to `[ZOOM_MIN, ZOOM_MAX]`; non-finite input is ignored.
    pub fn set_zoom(&mut self, level: f64) {
        if !level.is_finite() {
            return;
        }
        self.zoom_level = level.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Clamps to `[0, max(0, data_len - width / zoom)]` so the window can
    /// neither scroll past the oldest candle nor past the newest one.
    pub fn set_scroll(&mut self, offset: f64, data_len: usize, width: f64) {
        if !offset.is_finite() {
            return;
        }
        let max_scroll = (data_len as f64 - width / self.zoom_level).max(0.0);
        self.scroll_offset = offset.clamp(0.0, max_scroll);
    }
}

/// Index window of candles covered by one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl VisibleRange {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start_index >= self.end_index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Price envelope of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// Scale used when no candle contributes a price.
pub const FALLBACK_PRICE_BOUNDS: PriceBounds = PriceBounds {
    min: 0.0,
    max: 100.0,
};

/// Derives the visible index window for the current view state.
///
/// The window is anchored at the right edge minus the scroll offset and
/// extends left by however many slots fit the surface width.
#[must_use]
pub fn visible_range(data_len: usize, view: ViewState, width: f64) -> VisibleRange {
    if data_len == 0 {
        return VisibleRange {
            start_index: 0,
            end_index: 0,
        };
    }

    let visible_count = (width / view.zoom_level()).ceil() as usize;
    let end_index = data_len.saturating_sub(view.scroll_offset().floor() as usize);
    let start_index = end_index.saturating_sub(visible_count);

    VisibleRange {
        start_index,
        end_index,
    }
}

/// Scans the visible slice for its low/high envelope.
///
/// An empty window falls back to `[0, 100]`; a flat window widens by one
/// price unit on each side so the scale never degenerates.
#[must_use]
pub fn price_bounds(candles: &[Candle], range: VisibleRange) -> PriceBounds {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for candle in candles
        .iter()
        .take(range.end_index)
        .skip(range.start_index)
    {
        min = min.min(candle.low);
        max = max.max(candle.high);
    }

    if !min.is_finite() || !max.is_finite() {
        return FALLBACK_PRICE_BOUNDS;
    }

    if min == max {
        return PriceBounds {
            min: min - 1.0,
            max: max + 1.0,
        };
    }

    PriceBounds { min, max }
}
