//! Colors and default dimensions for the progress bar.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Serialized as `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale alpha by `opacity` (clamped to [0,1]).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// Track, fill and stripe overlay
pub const TRACK: Color = Color::rgb(0xDE, 0xDE, 0xDE);
pub const FILL: Color = Color::rgb(0x5C, 0xB7, 0x5C);
pub const STRIPE: Color = Color::rgb(0x80, 0x80, 0x80);
pub const STRIPE_OPACITY: f32 = 0.5;
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

// Layout
pub const BAR_HEIGHT: f32 = 20.0;
pub const STRIPE_WIDTH: i32 = 20;
pub const STRIPE_PAD: i32 = 15;

// Animation
pub const TICK_HZ: f64 = 24.0;
