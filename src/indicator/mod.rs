//! Pluggable technical indicators.
//!
//! An indicator is a pure function of candle history plus a way to draw the
//! derived series over the main price scale. Results stay aligned 1:1 by
//! position with the candles that produced them; warm-up positions carry
//! NaN and the polyline breaks across them instead of interpolating.

pub mod sma;

pub use sma::SimpleMovingAverage;

use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::core::coords::{self, DEFAULT_PRICE_PADDING_PX};
use crate::render::{ChartLayerKind, Color, LayeredFrame, LinePrimitive};

/// One derived sample, aligned by position with the candle it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSample {
    pub time: i64,
    pub value: f64,
}

/// View parameters an indicator needs to place its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorView {
    pub start_index: usize,
    pub end_index: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub height: f64,
    pub zoom_level: f64,
}

/// A derived series over candle history that knows how to draw itself.
pub trait Indicator {
    fn name(&self) -> &str;

    /// Overlay indicators share the main price scale; non-overlay ones are
    /// destined for a separate pane (no built-in uses one yet).
    fn is_overlay(&self) -> bool {
        true
    }

    fn stroke(&self) -> Color {
        Color::from_rgb8(0x29, 0x62, 0xff)
    }

    /// Pure function of candle history. The result has the same length as
    /// the input, NaN-filled over the warm-up prefix.
    fn calculate(&self, candles: &[Candle]) -> Vec<IndicatorSample>;

    /// Draws the series into the indicator layer.
    ///
    /// The default implementation is a gap-aware polyline; variants
    /// normally only override [`Indicator::stroke`].
    fn render(&self, frame: &mut LayeredFrame, samples: &[IndicatorSample], view: &IndicatorView) {
        render_polyline(frame, samples, self.stroke(), view);
    }
}

/// Projects samples over the visible window into connected line segments,
/// restarting the line at every NaN or missing sample.
///
/// Y placement uses [`DEFAULT_PRICE_PADDING_PX`], the same vertical inset
/// the engine applies to its price scale by default.
pub fn render_polyline(
    frame: &mut LayeredFrame,
    samples: &[IndicatorSample],
    stroke: Color,
    view: &IndicatorView,
) {
    let mut previous: Option<(f64, f64)> = None;

    for index in view.start_index..view.end_index {
        let Some(sample) = samples.get(index) else {
            previous = None;
            continue;
        };
        if sample.value.is_nan() {
            previous = None;
            continue;
        }

        let x = coords::index_to_x(index as i64, view.start_index as i64, view.zoom_level);
        let y = coords::price_to_y(
            sample.value,
            view.min_price,
            view.max_price,
            view.height,
            DEFAULT_PRICE_PADDING_PX,
        );

        if let Some((prev_x, prev_y)) = previous {
            frame.push_line(
                ChartLayerKind::Indicators,
                LinePrimitive::new(prev_x, prev_y, x, y, 2.0, stroke),
            );
        }
        previous = Some((x, y));
    }
}
