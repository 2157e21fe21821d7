use crate::core::{Candle, coords};
use crate::render::{
    ChartLayerKind, Color, LayeredFrame, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive,
};

use super::{AnchorPoint, DrawingTool, DrawingView, TwoPointState, resolve_anchor_index};

/// Retracement levels as fractions of the anchor-to-anchor price delta.
pub const FIB_LEVELS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

const LABEL_FONT_PX: f64 = 10.0;
const LABEL_X_OFFSET: f64 = 5.0;
const LABEL_Y_OFFSET: f64 = 3.0;

/// Fibonacci retracement between two anchors: a dashed diagonal plus seven
/// labeled horizontal level lines, with the 0%, 50%, and 100% levels drawn
/// in a highlight stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct FibonacciRetracement {
    state: TwoPointState,
    anchor_stroke: Color,
    level_stroke: Color,
    highlight_stroke: Color,
    label_color: Color,
}

impl FibonacciRetracement {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TwoPointState::default(),
            anchor_stroke: Color::from_rgb8(0xaa, 0xaa, 0xaa),
            level_stroke: Color::from_rgb8(0x29, 0x62, 0xff),
            highlight_stroke: Color::rgb(1.0, 1.0, 1.0),
            label_color: Color::from_rgb8(0xcc, 0xcc, 0xcc),
        }
    }
}

impl Default for FibonacciRetracement {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingTool for FibonacciRetracement {
    fn name(&self) -> &str {
        "Fibonacci Retracement"
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

        let first = points[0];
        let second = points[1];

        // Both anchors must resolve against the current series.
        let Some(first_index) = resolve_anchor_index(data, first) else {
            return;
        };
        let Some(second_index) = resolve_anchor_index(data, second) else {
            return;
        };

        let x1 = coords::index_to_x(first_index as i64, view.start_index as i64, view.zoom_level);
        let x2 = coords::index_to_x(second_index as i64, view.start_index as i64, view.zoom_level);
        let y1 = coords::price_to_y(
            first.price,
            view.min_price,
            view.max_price,
            view.height,
            view.padding,
        );
        let y2 = coords::price_to_y(
            second.price,
            view.min_price,
            view.max_price,
            view.height,
            view.padding,
        );

        frame.push_line(
            ChartLayerKind::Drawings,
            LinePrimitive::new(x1, y1, x2, y2, 1.0, self.anchor_stroke)
                .with_style(LineStrokeStyle::Dashed),
        );

        let price_delta = second.price - first.price;
        let left_x = x1.min(x2);
        let right_x = x1.max(x2);

        for level in FIB_LEVELS {
            let level_price = first.price + price_delta * level;
            let level_y = coords::price_to_y(
                level_price,
                view.min_price,
                view.max_price,
                view.height,
                view.padding,
            );

            let stroke = if level == 0.0 || level == 0.5 || level == 1.0 {
                self.highlight_stroke
            } else {
                self.level_stroke
            };
            frame.push_line(
                ChartLayerKind::Drawings,
                LinePrimitive::new(left_x, level_y, right_x, level_y, 1.0, stroke),
            );

            frame.push_text(
                ChartLayerKind::Drawings,
                TextPrimitive::new(
                    format!("{:.1}%", level * 100.0),
                    right_x + LABEL_X_OFFSET,
                    level_y + LABEL_Y_OFFSET,
                    LABEL_FONT_PX,
                    self.label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }
}
