use proptest::prelude::*;
use replay_chart::core::coords::{index_to_x, price_to_y, x_to_index, y_to_price};

proptest! {
    #[test]
    fn price_round_trip_property(
        min_price in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        height in 100.0f64..4096.0,
    ) {
        let max_price = min_price + span;
        let price = min_price + value_factor * span;
        let padding = 20.0;

        let y = price_to_y(price, min_price, max_price, height, padding);
        let recovered = y_to_price(y, min_price, max_price, height, padding);

        let tolerance = span.max(1.0) * 1e-9;
        prop_assert!((recovered - price).abs() <= tolerance);
    }

    #[test]
    fn index_round_trip_property(
        index in -10_000i64..10_000,
        start_index in -10_000i64..10_000,
        candle_width in 1u32..=100,
    ) {
        let width = f64::from(candle_width);
        let x = index_to_x(index, start_index, width);
        prop_assert_eq!(x_to_index(x, start_index, width), index);
    }
}
