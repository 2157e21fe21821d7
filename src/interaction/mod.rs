//! Translates raw pointer input into drawing-tool lifecycle calls.
//!
//! The manager sits above the engine: the host forwards pointer events plus
//! the surface's current bounding rectangle, and gets back `false` whenever
//! the event should fall through to the host's own pan/zoom handling.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::coords::{self, DEFAULT_PRICE_PADDING_PX};
use crate::drawing::{DrawingTool, SharedDrawing};
use crate::engine::ChartEngine;
use crate::error::ChartResult;
use crate::render::Renderer;

/// Raw pointer event in client coordinates, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

/// The drawing surface's bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Anchor time produced when the pointer maps outside the data window.
/// It never matches a real candle, so such an anchor renders nothing.
const OUT_OF_RANGE_TIME: i64 = 0;

/// Routes pointer events either into the active drawing tool or back to
/// the host.
///
/// Holds at most one active tool. Tool selection is single-use: once a
/// drawing finishes, the slot clears and the host must re-select the tool
/// to draw again.
#[derive(Default)]
pub struct InteractionManager {
    active_tool: Option<SharedDrawing>,
    is_drawing: bool,
}

impl InteractionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_active_tool(&self) -> bool {
        self.active_tool.is_some()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Replaces the active tool and abandons any in-progress draw.
    ///
    /// A partial drawing already registered with the engine stays visible
    /// until the host clears the drawing list.
    pub fn set_tool(&mut self, tool: Option<SharedDrawing>) {
        self.active_tool = tool;
        self.is_drawing = false;
    }

    /// Handles a pointer press.
    ///
    /// Returns `Ok(false)` when no tool is active so the caller can fall
    /// back to pan. The first press arms the tool and registers it with
    /// the engine immediately, so the half-finished drawing is visible
    /// while it is being built; a later press finishes it.
    pub fn handle_pointer_down<R: Renderer>(
        &mut self,
        engine: &mut ChartEngine<R>,
        event: PointerEvent,
        rect: SurfaceRect,
    ) -> ChartResult<bool> {
        let Some(tool) = self.active_tool.clone() else {
            return Ok(false);
        };

        let (time, price) = pointer_to_domain(engine, event, rect);

        if !self.is_drawing {
            tool.borrow_mut().on_mouse_down(time, price);
            self.is_drawing = true;
            trace!(time, price, "start drawing");
            // add_drawing re-renders, which shows the live preview point.
            engine.add_drawing(tool)?;
            return Ok(true);
        }

        let finished = {
            let mut tool = tool.borrow_mut();
            tool.on_mouse_up(time, price);
            tool.is_finished()
        };
        if finished {
            trace!(time, price, "finish drawing");
            self.active_tool = None;
            self.is_drawing = false;
        }

        engine.render()?;
        Ok(true)
    }

    /// Forwards pointer movement to the in-progress tool's preview point.
    ///
    /// Returns `Ok(false)` unless a draw is underway.
    pub fn handle_pointer_move<R: Renderer>(
        &mut self,
        engine: &mut ChartEngine<R>,
        event: PointerEvent,
        rect: SurfaceRect,
    ) -> ChartResult<bool> {
        if self.active_tool.is_none() || !self.is_drawing {
            return Ok(false);
        }

        let (time, price) = pointer_to_domain(engine, event, rect);
        if let Some(tool) = &self.active_tool {
            tool.borrow_mut().on_mouse_move(time, price);
        }

        engine.render()?;
        Ok(true)
    }
}

/// Maps a client-space pointer position into domain (time, price) using
/// the engine's last published view snapshot.
fn pointer_to_domain<R: Renderer>(
    engine: &ChartEngine<R>,
    event: PointerEvent,
    rect: SurfaceRect,
) -> (i64, f64) {
    let x = event.client_x - rect.left;
    let y = event.client_y - rect.top;

    let snapshot = engine.view_snapshot();
    let height = f64::from(engine.viewport().height);

    let price = coords::y_to_price(
        y,
        snapshot.min_price,
        snapshot.max_price,
        height,
        DEFAULT_PRICE_PADDING_PX,
    );

    let index = coords::x_to_index(x, snapshot.start_index as i64, snapshot.zoom_level);
    let time = usize::try_from(index)
        .ok()
        .and_then(|index| engine.data().get(index))
        .map_or(OUT_OF_RANGE_TIME, |candle| candle.time);

    (time, price)
}
