use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::{Color, DrawCommand, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Compositing order of the chart scene, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Background,
    Grid,
    Candles,
    Indicators,
    Drawings,
}

impl ChartLayerKind {
    /// Canonical back-to-front stack; later layers draw over earlier ones.
    #[must_use]
    pub const fn canonical_stack() -> [ChartLayerKind; 5] {
        [
            ChartLayerKind::Background,
            ChartLayerKind::Grid,
            ChartLayerKind::Candles,
            ChartLayerKind::Indicators,
            ChartLayerKind::Drawings,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LayerCommands {
    kind: ChartLayerKind,
    commands: Vec<DrawCommand>,
}

/// Scene under construction, bucketed per layer.
///
/// Producers push into their own layer in any order; `flatten` emits the
/// canonical stack order with intra-layer push order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredFrame {
    viewport: Viewport,
    background: Color,
    layers: Vec<LayerCommands>,
}

impl LayeredFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        let layers = ChartLayerKind::canonical_stack()
            .into_iter()
            .map(|kind| LayerCommands {
                kind,
                commands: Vec::new(),
            })
            .collect();
        Self {
            viewport,
            background,
            layers,
        }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, kind: ChartLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).commands.push(DrawCommand::Text(text));
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport, self.background);
        for layer in &self.layers {
            frame.commands.extend(layer.commands.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> &mut LayerCommands {
        // Construction fills the buckets in canonical order, so the enum
        // discriminant doubles as the bucket index.
        &mut self.layers[kind as usize]
    }
}
