//! Scene assembly for one draw pass.
//!
//! Everything here is a pure projection of engine state into layered draw
//! commands; the engine flattens the result and hands it to the backend.

use crate::core::coords;
use crate::drawing::{DrawingTool, DrawingView};
use crate::indicator::{Indicator, IndicatorView};
use crate::render::{
    ChartLayerKind, LayeredFrame, LinePrimitive, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;

/// Number of even price steps between horizontal grid lines.
pub const GRID_STEPS: usize = 10;

pub const PLACEHOLDER_TEXT: &str = "Waiting for Data...";

pub(super) fn build<R: Renderer>(engine: &ChartEngine<R>) -> LayeredFrame {
    let mut frame = LayeredFrame::new(engine.viewport, engine.style.background);
    let width = f64::from(engine.viewport.width);
    let height = f64::from(engine.viewport.height);

    push_grid(&mut frame, engine, width, height);

    if engine.data.is_empty() {
        frame.push_text(
            ChartLayerKind::Grid,
            TextPrimitive::new(
                PLACEHOLDER_TEXT,
                width / 2.0,
                height / 2.0,
                engine.style.placeholder_font_px,
                engine.style.placeholder_text,
                TextHAlign::Center,
            ),
        );
        return frame;
    }

    push_candles(&mut frame, engine, height);

    let snapshot = engine.snapshot;
    let indicator_view = IndicatorView {
        start_index: snapshot.start_index,
        end_index: snapshot.end_index,
        min_price: snapshot.min_price,
        max_price: snapshot.max_price,
        height,
        zoom_level: snapshot.zoom_level,
    };
    for attached in &engine.indicators {
        attached
            .instance
            .render(&mut frame, &attached.samples, &indicator_view);
    }

    let drawing_view = DrawingView {
        start_index: snapshot.start_index,
        end_index: snapshot.end_index,
        min_price: snapshot.min_price,
        max_price: snapshot.max_price,
        height,
        zoom_level: snapshot.zoom_level,
        padding: engine.view.padding(),
    };
    for drawing in &engine.drawings {
        drawing.borrow().render(&mut frame, &engine.data, &drawing_view);
    }

    frame
}

fn push_grid<R: Renderer>(frame: &mut LayeredFrame, engine: &ChartEngine<R>, width: f64, height: f64) {
    let snapshot = engine.snapshot;
    let step_value = (snapshot.max_price - snapshot.min_price) / GRID_STEPS as f64;

    for step in 0..=GRID_STEPS {
        let price = snapshot.min_price + step as f64 * step_value;
        let y = coords::price_to_y(
            price,
            snapshot.min_price,
            snapshot.max_price,
            height,
            engine.view.padding(),
        );
        frame.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(0.0, y, width, y, 1.0, engine.style.grid),
        );
    }
}

fn push_candles<R: Renderer>(frame: &mut LayeredFrame, engine: &ChartEngine<R>, height: f64) {
    let snapshot = engine.snapshot;
    let zoom = snapshot.zoom_level;
    let padding = engine.view.padding();

    let wick_width = (zoom * 0.1).floor().max(1.0);
    let body_width = (zoom * 0.7).floor().max(1.0);

    for index in snapshot.start_index..snapshot.end_index {
        let candle = &engine.data[index];

        let x = coords::index_to_x(index as i64, snapshot.start_index as i64, zoom);
        let open_y = coords::price_to_y(
            candle.open,
            snapshot.min_price,
            snapshot.max_price,
            height,
            padding,
        );
        let close_y = coords::price_to_y(
            candle.close,
            snapshot.min_price,
            snapshot.max_price,
            height,
            padding,
        );
        let high_y = coords::price_to_y(
            candle.high,
            snapshot.min_price,
            snapshot.max_price,
            height,
            padding,
        );
        let low_y = coords::price_to_y(
            candle.low,
            snapshot.min_price,
            snapshot.max_price,
            height,
            padding,
        );

        let fill = if candle.is_bullish() {
            engine.style.bullish
        } else {
            engine.style.bearish
        };

        frame.push_rect(
            ChartLayerKind::Candles,
            RectPrimitive::new(
                x + (zoom - wick_width) / 2.0,
                high_y,
                wick_width,
                (low_y - high_y).abs(),
                fill,
            ),
        );

        // A doji still gets a visible one-pixel body.
        let body_height = (close_y - open_y).abs().max(1.0);
        frame.push_rect(
            ChartLayerKind::Candles,
            RectPrimitive::new(
                x + (zoom - body_width) / 2.0,
                open_y.min(close_y),
                body_width,
                body_height,
                fill,
            ),
        );
    }
}
