use replay_chart::core::{Candle, Viewport};
use replay_chart::drawing::AnchorPoint;
use replay_chart::engine::{ChartEngine, ChartStyle, ViewSnapshot};
use replay_chart::render::{Color, NullRenderer};

fn series(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64;
            Candle::new(1_000 + 60 * i as i64, base, base + 2.0, base - 2.0, base + 1.0)
                .expect("valid candle")
        })
        .collect()
}

#[test]
fn candle_round_trips_through_json() {
    let candle = Candle::new(1_700_000_000, 1.1, 1.3, 1.0, 1.2)
        .expect("valid candle")
        .with_volume(1_250.0);

    let json = serde_json::to_string(&candle).expect("serialize");
    let back: Candle = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, candle);
}

#[test]
fn absent_volume_is_omitted_and_defaulted() {
    let candle = Candle::new(1_700_000_000, 1.1, 1.3, 1.0, 1.2).expect("valid candle");

    let value = serde_json::to_value(candle).expect("serialize");
    assert!(value.get("volume").is_none());

    let back: Candle =
        serde_json::from_str(r#"{"time":1700000000,"open":1.1,"high":1.3,"low":1.0,"close":1.2}"#)
            .expect("deserialize");
    assert_eq!(back.volume, None);
}

#[test]
fn anchor_point_round_trips_through_json() {
    let anchor = AnchorPoint {
        time: 1_700_000_060,
        price: 103.25,
    };

    let json = serde_json::to_string(&anchor).expect("serialize");
    let back: AnchorPoint = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, anchor);
}

#[test]
fn chart_style_round_trips_through_json() {
    let style = ChartStyle {
        background: Color::from_rgb8(6, 8, 13),
        ..ChartStyle::default()
    };

    let json = serde_json::to_string(&style).expect("serialize");
    let back: ChartStyle = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, style);
}

#[test]
fn view_snapshot_serializes_for_host_overlays() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), Viewport::new(100, 400)).expect("engine init");
    engine.set_data(series(10)).expect("set data");

    let snapshot = engine.view_snapshot();
    let value = serde_json::to_value(snapshot).expect("serialize");
    assert_eq!(value["start_index"], 0);
    assert_eq!(value["end_index"], 10);
    assert_eq!(value["min_price"], 98.0);
    assert_eq!(value["max_price"], 111.0);

    let back: ViewSnapshot = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, snapshot);
}
