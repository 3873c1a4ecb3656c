//! Marching Ants
//!
//! An animated progress bar: a filled bar tracking a value in [0,1], overlaid
//! with diagonal stripes that scroll continuously. Rendering is a plain
//! function from (progress, viewport, time) to a list of draw commands, so any
//! host loop can drive it and the geometry can be checked without a display.

pub mod animator;
pub mod bar;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod progress;
pub mod raster;
pub mod style;
pub mod theme;
pub mod view;

pub use animator::{stripe_delta, FrameClock, FrameTicker, StripeAnimator};
pub use draw::{DrawCommand, Path, PathOp, Rect};
pub use error::{Error, Result};
pub use geometry::{clip_stripe, ClippedPolygon, StripeQuad};
pub use progress::{ProgressSource, SharedProgress};
pub use raster::Rasterizer;
pub use style::BarStyle;
pub use theme::Color;
pub use view::{render, ProgressBarView, StripeLayout, Viewport};
