use criterion::{Criterion, criterion_group, criterion_main};
use replay_chart::core::coords::{DEFAULT_PRICE_PADDING_PX, price_to_y, y_to_price};
use replay_chart::core::view::{ViewState, price_bounds, visible_range};
use replay_chart::core::{Candle, Viewport};
use replay_chart::engine::ChartEngine;
use replay_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_series(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = base.min(close) - 0.75;
            let high = base.max(close) + 0.75;
            Candle::new(60 * i as i64, base, high, low, close).expect("valid generated candle")
        })
        .collect()
}

fn bench_price_round_trip(c: &mut Criterion) {
    c.bench_function("price_round_trip", |b| {
        b.iter(|| {
            let y = price_to_y(
                black_box(4_321.123),
                0.0,
                10_000.0,
                1_080.0,
                DEFAULT_PRICE_PADDING_PX,
            );
            let _ = y_to_price(y, 0.0, 10_000.0, 1_080.0, DEFAULT_PRICE_PADDING_PX);
        })
    });
}

fn bench_visible_window_scan_10k(c: &mut Criterion) {
    let candles = generated_series(10_000);
    let mut view = ViewState::default();
    view.set_zoom(1.0);
    view.set_scroll(2_500.0, candles.len(), 1_920.0);

    c.bench_function("visible_window_scan_10k", |b| {
        b.iter(|| {
            let range = visible_range(black_box(candles.len()), view, 1_920.0);
            let _ = price_bounds(black_box(&candles), range);
        })
    });
}

fn bench_full_frame_build_2k(c: &mut Criterion) {
    let mut engine = ChartEngine::new(NullRenderer::default(), Viewport::new(1_600, 900))
        .expect("engine init");
    engine.set_data(generated_series(2_000)).expect("set data");
    engine.set_zoom(1.0).expect("set zoom");

    c.bench_function("full_frame_build_2k", |b| {
        b.iter(|| {
            engine.render().expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_price_round_trip,
    bench_visible_window_scan_10k,
    bench_full_frame_build_2k
);
criterion_main!(benches);
