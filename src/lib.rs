//! replay-chart: a headless candlestick charting engine.
//!
//! The crate maps (price, index) domain space onto pixel space, keeps
//! scroll/zoom viewport state, and rebuilds a backend-agnostic frame of
//! draw primitives on every state change. Hosts embed it by implementing
//! the [`render::Renderer`] backend contract (or enabling the
//! `cairo-backend` feature) and forwarding pointer events to
//! [`interaction::InteractionManager`].

pub mod core;
pub mod drawing;
pub mod engine;
pub mod error;
pub mod indicator;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use crate::core::{Candle, Viewport};
pub use engine::{ChartEngine, ChartStyle, ViewSnapshot};
pub use error::{ChartError, ChartResult};
