use crate::core::{Candle, coords};
use crate::render::{ChartLayerKind, Color, LayeredFrame, LinePrimitive};

use super::{AnchorPoint, DrawingTool, DrawingView, TwoPointState, resolve_anchor_index};

/// Straight segment between two anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    state: TwoPointState,
    stroke: Color,
}

impl TrendLine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TwoPointState::default(),
            stroke: Color::from_rgb8(0x29, 0x62, 0xff),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Default for TrendLine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingTool for TrendLine {
    fn name(&self) -> &str {
        "Trend Line"
    }

    fn points(&self) -> &[AnchorPoint] {
        self.state.points()
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn on_mouse_down(&mut self, time: i64, price: f64) {
        self.state.press(time, price);
    }

    fn on_mouse_move(&mut self, time: i64, price: f64) {
        self.state.drag(time, price);
    }

    fn on_mouse_up(&mut self, time: i64, price: f64) {
        self.state.release(time, price);
    }

    fn render(&self, frame: &mut LayeredFrame, data: &[Candle], view: &DrawingView) {
        let points = self.state.points();
        if points.len() < 2 {
            return;
        }

        let mut previous: Option<(f64, f64)> = None;
        for point in points {
            let Some(index) = resolve_anchor_index(data, *point) else {
                continue;
            };

            let x = coords::index_to_x(index as i64, view.start_index as i64, view.zoom_level);
            let y = coords::price_to_y(
                point.price,
                view.min_price,
                view.max_price,
                view.height,
                view.padding,
            );

            if let Some((prev_x, prev_y)) = previous {
                frame.push_line(
                    ChartLayerKind::Drawings,
                    LinePrimitive::new(prev_x, prev_y, x, y, 2.0, self.stroke),
                );
            }
            previous = Some((x, y));
        }
    }
}
