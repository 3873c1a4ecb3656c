//! Bar style configuration.
//!
//! Every field has a default, so a style file only needs to name what it
//! changes:
//!
//! ```json
//! { "stripe_width": 16, "fill_color": [40, 120, 220, 255] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::theme::{self, Color};

/// Dimensions, colors and tick rate for one progress bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    pub height: f32,
    pub stripe_width: i32,
    pub stripe_pad: i32,
    pub track_color: Color,
    pub fill_color: Color,
    pub stripe_color: Color,
    pub stripe_opacity: f32,
    pub tick_hz: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            height: theme::BAR_HEIGHT,
            stripe_width: theme::STRIPE_WIDTH,
            stripe_pad: theme::STRIPE_PAD,
            track_color: theme::TRACK,
            fill_color: theme::FILL,
            stripe_color: theme::STRIPE,
            stripe_opacity: theme::STRIPE_OPACITY,
            tick_hz: theme::TICK_HZ,
        }
    }
}

impl BarStyle {
    /// Horizontal distance between neighbouring stripes, and the span the
    /// animation delta sweeps each second.
    pub fn stripe_period(&self) -> i32 {
        self.stripe_width.saturating_mul(2)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.height > 0.0) {
            return Err(Error::InvalidStyle(format!("height must be positive, got {}", self.height)));
        }
        if self.stripe_width <= 0 {
            return Err(Error::InvalidStyle(format!(
                "stripe_width must be positive, got {}",
                self.stripe_width
            )));
        }
        if self.stripe_pad < 0 {
            return Err(Error::InvalidStyle(format!(
                "stripe_pad must not be negative, got {}",
                self.stripe_pad
            )));
        }
        if !(0.0..=1.0).contains(&self.stripe_opacity) {
            return Err(Error::InvalidStyle(format!(
                "stripe_opacity must be within [0, 1], got {}",
                self.stripe_opacity
            )));
        }
        if !(self.tick_hz > 0.0) {
            return Err(Error::InvalidStyle(format!("tick_hz must be positive, got {}", self.tick_hz)));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Read and validate a JSON style file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            stripe_width = style.stripe_width,
            stripe_pad = style.stripe_pad,
            "Loaded bar style"
        );
        Ok(style)
    }
}
