pub mod coords;
pub mod types;
pub mod view;

pub use types::{Candle, Viewport};
pub use view::{PriceBounds, ViewState, VisibleRange};
