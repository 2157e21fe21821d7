//! Interactive drawing tools anchored in domain space.
//!
//! Tools store control points as (time, price), never as pixels, so a
//! finished drawing survives zoom, scroll, and resize. Each render pass
//! resolves the stored times back against the current candle array; an
//! anchor whose candle left the series simply skips that frame.

pub mod fibonacci;
pub mod trend_line;

pub use fibonacci::{FIB_LEVELS, FibonacciRetracement};
pub use trend_line::TrendLine;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::Candle;
use crate::render::LayeredFrame;

/// A drawing control point in domain space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub time: i64,
    pub price: f64,
}

/// View parameters a drawing needs to place its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingView {
    pub start_index: usize,
    pub end_index: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub height: f64,
    pub zoom_level: f64,
    pub padding: f64,
}

/// Pointer-driven drawing capability.
///
/// A tool is a three-step machine: empty until the first press arms it with
/// an anchor plus a live preview point, then finished once a second press
/// or a drag-release pins the preview down. Once finished, pointer input no
/// longer mutates the points.
pub trait DrawingTool {
    fn name(&self) -> &str;

    fn points(&self) -> &[AnchorPoint];

    fn is_finished(&self) -> bool;

    fn on_mouse_down(&mut self, time: i64, price: f64);

    fn on_mouse_move(&mut self, time: i64, price: f64);

    fn on_mouse_up(&mut self, time: i64, price: f64);

    /// Draws into the drawings layer. A tool with fewer than two points or
    /// with unresolvable anchors draws nothing; that is not an error.
    fn render(&self, frame: &mut LayeredFrame, data: &[Candle], view: &DrawingView);
}

/// Shared tool handle.
///
/// The interaction manager and the engine's drawing list both hold the
/// in-progress tool, so a half-built drawing is visible while it still
/// receives pointer events. The engine is single-threaded by contract.
pub type SharedDrawing = Rc<RefCell<dyn DrawingTool>>;

/// Wraps a tool for shared ownership.
#[must_use]
pub fn shared(tool: impl DrawingTool + 'static) -> SharedDrawing {
    Rc::new(RefCell::new(tool))
}

/// Two-anchor capture state shared by the built-in tools.
///
/// Both finishing gestures are supported on purpose: a second press pins
/// the preview point (click-move-click), and so does releasing after a
/// drag (press-drag-release).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoPointState {
    points: Vec<AnchorPoint>,
    finished: bool,
}

impl TwoPointState {
    #[must_use]
    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn press(&mut self, time: i64, price: f64) {
        let anchor = AnchorPoint { time, price };
        if self.points.is_empty() {
            self.points.push(anchor);
            // Second slot is the live preview, overwritten by every move.
            self.points.push(anchor);
        } else if self.points.len() == 2 && !self.finished {
            self.points[1] = anchor;
            self.finished = true;
        }
    }

    pub fn drag(&mut self, time: i64, price: f64) {
        if !self.points.is_empty() && !self.finished {
            self.points[1] = AnchorPoint { time, price };
        }
    }

    pub fn release(&mut self, time: i64, price: f64) {
        if self.points.len() >= 2 && !self.finished {
            self.points[1] = AnchorPoint { time, price };
            self.finished = true;
        }
    }
}

/// Resolves an anchor back to its candle index by exact time match.
///
/// Linear scan per call; drawing counts stay small enough that an index
/// map has not been worth carrying.
#[must_use]
pub fn resolve_anchor_index(data: &[Candle], anchor: AnchorPoint) -> Option<usize> {
    data.iter().position(|candle| candle.time == anchor.time)
}
