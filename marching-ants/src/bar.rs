//! Solid fill for the completed part of the bar.

use crate::draw::{DrawCommand, Rect};
use crate::style::BarStyle;

/// Rectangle from `(0, 0)` to `(progress * viewport_width, height)`.
pub fn bar_rect(progress: f32, viewport_width: f32, height: f32) -> Rect {
    Rect::new(0.0, 0.0, progress * viewport_width, height)
}

pub fn bar_command(progress: f32, viewport_width: f32, style: &BarStyle) -> DrawCommand {
    DrawCommand::FillRect {
        rect: bar_rect(progress, viewport_width, style.height),
        color: style.fill_color,
    }
}
