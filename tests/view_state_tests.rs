use replay_chart::core::view::{
    FALLBACK_PRICE_BOUNDS, ViewState, VisibleRange, ZOOM_MAX, ZOOM_MIN, price_bounds,
    visible_range,
};
use replay_chart::core::Candle;

fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| Candle::new(60 * i as i64, price, price, price, price).expect("valid candle"))
        .collect()
}

#[test]
fn zoom_clamps_to_valid_range() {
    let mut view = ViewState::default();

    view.set_zoom(1_000.0);
    assert_eq!(view.zoom_level(), ZOOM_MAX);

    view.set_zoom(0.25);
    assert_eq!(view.zoom_level(), ZOOM_MIN);

    view.set_zoom(f64::NAN);
    assert_eq!(view.zoom_level(), ZOOM_MIN);
}

#[test]
fn scroll_clamps_to_data_extent() {
    let mut view = ViewState::default();
    view.set_zoom(20.0);

    // 10 candles, viewport fits 5.
    view.set_scroll(1_000.0, 10, 100.0);
    assert_eq!(view.scroll_offset(), 5.0);

    view.set_scroll(-3.0, 10, 100.0);
    assert_eq!(view.scroll_offset(), 0.0);
}

#[test]
fn scroll_clamp_collapses_when_data_fits() {
    let mut view = ViewState::default();

    view.set_scroll(4.0, 5, 100.0);
    assert_eq!(view.scroll_offset(), 0.0);
}

#[test]
fn visible_range_covers_whole_series_at_matching_zoom() {
    let view = ViewState::default();

    let range = visible_range(10, view, 100.0);
    assert_eq!(
        range,
        VisibleRange {
            start_index: 0,
            end_index: 10
        }
    );
}

#[test]
fn visible_range_shifts_left_with_scroll() {
    let mut view = ViewState::default();
    view.set_scroll(5.0, 100, 100.0);

    let range = visible_range(100, view, 100.0);
    assert_eq!(range.end_index, 95);
    assert_eq!(range.start_index, 85);
}

#[test]
fn visible_range_is_empty_without_data() {
    let range = visible_range(0, ViewState::default(), 100.0);
    assert!(range.is_empty());
    assert_eq!(range.len(), 0);
}

#[test]
fn price_bounds_scans_low_high_envelope() {
    let candles = vec![
        Candle::new(0, 10.0, 12.0, 9.0, 11.0).expect("valid candle"),
        Candle::new(60, 11.0, 15.0, 10.5, 14.0).expect("valid candle"),
        Candle::new(120, 14.0, 14.5, 8.0, 9.0).expect("valid candle"),
    ];
    let range = VisibleRange {
        start_index: 0,
        end_index: 3,
    };

    let bounds = price_bounds(&candles, range);
    assert_eq!(bounds.min, 8.0);
    assert_eq!(bounds.max, 15.0);
}

#[test]
fn price_bounds_ignores_candles_outside_window() {
    let candles = vec![
        Candle::new(0, 1.0, 100.0, 1.0, 50.0).expect("valid candle"),
        Candle::new(60, 10.0, 12.0, 9.0, 11.0).expect("valid candle"),
    ];
    let range = VisibleRange {
        start_index: 1,
        end_index: 2,
    };

    let bounds = price_bounds(&candles, range);
    assert_eq!(bounds.min, 9.0);
    assert_eq!(bounds.max, 12.0);
}

#[test]
fn empty_window_falls_back_to_default_bounds() {
    let candles = flat_candles(3, 42.0);
    let range = VisibleRange {
        start_index: 3,
        end_index: 3,
    };

    let bounds = price_bounds(&candles, range);
    assert_eq!(bounds, FALLBACK_PRICE_BOUNDS);
}

#[test]
fn flat_window_widens_by_one_unit() {
    let candles = flat_candles(4, 42.0);
    let range = VisibleRange {
        start_index: 0,
        end_index: 4,
    };

    let bounds = price_bounds(&candles, range);
    assert_eq!(bounds.min, 41.0);
    assert_eq!(bounds.max, 43.0);
}
