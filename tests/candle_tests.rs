use chrono::{TimeZone, Utc};
use replay_chart::core::Candle;
use rust_decimal::Decimal;

#[test]
fn inverted_low_high_is_rejected() {
    let candle = Candle::new(1, 120.0, 110.0, 90.0, 100.0);
    assert!(candle.is_err());
}

#[test]
fn open_or_close_outside_range_is_rejected() {
    let candle = Candle::new(1, 85.0, 110.0, 90.0, 100.0);
    assert!(candle.is_err());

    let candle = Candle::new(1, 100.0, 110.0, 90.0, 120.0);
    assert!(candle.is_err());
}

#[test]
fn non_finite_price_is_rejected() {
    let candle = Candle::new(1, f64::NAN, 110.0, 90.0, 100.0);
    assert!(candle.is_err());
}

#[test]
fn bullishness_is_keyed_on_close_versus_open() {
    let up = Candle::new(1, 100.0, 110.0, 90.0, 105.0).expect("valid candle");
    let flat = Candle::new(1, 100.0, 110.0, 90.0, 100.0).expect("valid candle");
    let down = Candle::new(1, 105.0, 110.0, 90.0, 100.0).expect("valid candle");

    assert!(up.is_bullish());
    assert!(flat.is_bullish());
    assert!(!down.is_bullish());
}

#[test]
fn decimal_time_constructor_converts_to_unix_seconds() {
    let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("valid datetime");

    let candle = Candle::from_decimal_time(
        time,
        Decimal::new(11, 1),
        Decimal::new(13, 1),
        Decimal::new(10, 1),
        Decimal::new(12, 1),
    )
    .expect("valid candle");

    assert_eq!(candle.time, time.timestamp());
    assert_eq!(candle.open, 1.1);
    assert_eq!(candle.close, 1.2);
}

#[test]
fn volume_attaches_through_builder() {
    let candle = Candle::new(1, 100.0, 110.0, 90.0, 105.0)
        .expect("valid candle")
        .with_volume(42.5);
    assert_eq!(candle.volume, Some(42.5));
}
