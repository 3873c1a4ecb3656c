//! 2D rasterization of draw commands via tiny-skia.

use std::path::Path as FsPath;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::draw::{DrawCommand, Path, PathOp, Rect};
use crate::error::{Error, Result};
use crate::theme::Color;

pub struct Rasterizer {
    pixmap: Pixmap,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
        Ok(Self { pixmap })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Demultiplied color at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Paint commands in order.
    pub fn draw(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
                DrawCommand::FillPath {
                    path,
                    color,
                    opacity,
                } => self.fill_path(path, color.with_opacity(*opacity)),
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;

        // Zero-width rects (0% progress) are rejected by tiny-skia; nothing to draw.
        if let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    pub fn fill_path(&mut self, path: &Path, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = true;

        if let Some(path) = to_skia_path(path) {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| Error::Raster(format!("png encode: {e}")))
    }
}

fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo(p) => pb.move_to(p.x, p.y),
            PathOp::LineTo(p) => pb.line_to(p.x, p.y),
            PathOp::Close => pb.close(),
        }
    }
    pb.finish()
}
