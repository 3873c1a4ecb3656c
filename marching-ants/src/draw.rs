//! Draw commands emitted by the bar, consumed by a raster backend.

use glam::Vec2;

use crate::theme::Color;

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    Close,
}

/// A vector path built from move/line ops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::LineTo(p));
    }

    pub fn close(&mut self) {
        self.ops.push(PathOp::Close);
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Every point the path visits, in order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(p),
            PathOp::Close => None,
        })
    }
}

/// A single paint operation, in back-to-front order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillPath {
        path: Path,
        color: Color,
        opacity: f32,
    },
}
