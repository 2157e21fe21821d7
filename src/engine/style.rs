use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Palette for the built-in scene layers.
///
/// Defaults mirror the usual dark trading theme: black surface, faint grid,
/// green/red candles keyed on close-versus-open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background: Color,
    pub grid: Color,
    pub bullish: Color,
    pub bearish: Color,
    pub placeholder_text: Color,
    pub placeholder_font_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0.0, 0.0, 0.0),
            grid: Color::from_rgb8(42, 46, 57).with_alpha(0.2),
            bullish: Color::from_rgb8(0x08, 0x99, 0x81),
            bearish: Color::from_rgb8(0xf2, 0x36, 0x45),
            placeholder_text: Color::from_rgb8(0x55, 0x55, 0x55),
            placeholder_font_px: 20.0,
        }
    }
}
