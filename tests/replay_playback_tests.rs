use replay_chart::core::{Candle, Viewport};
use replay_chart::engine::ChartEngine;
use replay_chart::indicator::SimpleMovingAverage;
use replay_chart::render::NullRenderer;

fn history(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i % 7) as f64;
            Candle::new(1_000 + 60 * i as i64, base, base + 2.0, base - 2.0, base + 1.0)
                .expect("valid candle")
        })
        .collect()
}

#[test]
fn growing_prefix_recomputes_window_every_step() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), Viewport::new(100, 400)).expect("engine init");
    let full = history(50);

    for step in 1..=full.len() {
        engine.set_data(full[..step].to_vec()).expect("set prefix");

        let snapshot = engine.view_snapshot();
        assert_eq!(snapshot.end_index, step);
        assert_eq!(snapshot.start_index, step.saturating_sub(10));
        assert_eq!(snapshot.scroll_offset, 0.0);
    }

    assert_eq!(engine.renderer().frames_rendered, 50);
}

#[test]
fn view_state_survives_prefix_replacement() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), Viewport::new(100, 400)).expect("engine init");
    let full = history(50);

    engine.set_data(full[..30].to_vec()).expect("set prefix");
    engine.set_zoom(5.0).expect("set zoom");
    engine.set_scroll(2.0).expect("set scroll");

    engine.set_data(full[..31].to_vec()).expect("grow prefix");

    let snapshot = engine.view_snapshot();
    assert_eq!(snapshot.zoom_level, 5.0);
    assert_eq!(snapshot.scroll_offset, 2.0);
    assert_eq!(snapshot.end_index, 29);
}

#[test]
fn indicator_results_are_fixed_at_attach_time() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), Viewport::new(100, 400)).expect("engine init");
    let full = history(50);

    engine.set_data(full[..10].to_vec()).expect("set prefix");
    engine
        .add_indicator(Box::new(SimpleMovingAverage::new(3)))
        .expect("attach sma");

    // The playback driver replaces data without re-attaching; the stale
    // tail simply stops where the computed samples run out.
    engine.set_data(full[..20].to_vec()).expect("grow prefix");
    engine.render().expect("render");

    engine.clear_indicators().expect("clear");
    engine
        .add_indicator(Box::new(SimpleMovingAverage::new(3)))
        .expect("re-attach sma");
    assert_eq!(engine.indicator_count(), 1);
}
