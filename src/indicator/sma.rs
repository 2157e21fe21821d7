use crate::core::Candle;
use crate::render::Color;

use super::{Indicator, IndicatorSample};

/// Simple moving average: arithmetic mean of the trailing `period` closes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleMovingAverage {
    name: String,
    period: usize,
    stroke: Color,
}

impl SimpleMovingAverage {
    #[must_use]
    pub fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            name: format!("SMA {period}"),
            period,
            stroke: Color::from_rgb8(0x29, 0x62, 0xff),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for SimpleMovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn stroke(&self) -> Color {
        self.stroke
    }

    fn calculate(&self, candles: &[Candle]) -> Vec<IndicatorSample> {
        let mut samples = Vec::with_capacity(candles.len());

        for (index, candle) in candles.iter().enumerate() {
            if index + 1 < self.period {
                samples.push(IndicatorSample {
                    time: candle.time,
                    value: f64::NAN,
                });
                continue;
            }

            let window = &candles[index + 1 - self.period..=index];
            let sum: f64 = window.iter().map(|candle| candle.close).sum();
            samples.push(IndicatorSample {
                time: candle.time,
                value: sum / self.period as f64,
            });
        }

        samples
    }
}
