//! Composite progress bar view.
//!
//! Paint order is track, then fill, then the stripe overlay. Layout is
//! re-derived whenever the host reports a new viewport.

use tracing::debug;

use crate::animator::StripeAnimator;
use crate::bar;
use crate::draw::{DrawCommand, Rect};
use crate::geometry::{clip_stripe, StripeQuad};
use crate::progress::ProgressSource;
use crate::style::BarStyle;

/// Space the host layout gives the bar, in device-independent units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Base offsets of the stripes needed to cover a given width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StripeLayout {
    offsets: Vec<i32>,
}

impl StripeLayout {
    /// Empty when the width or the stripe period is not positive.
    pub fn compute(width: f32, style: &BarStyle) -> Self {
        let period = style.stripe_period();
        if period <= 0 || !(width > 0.0) {
            return Self::default();
        }
        // Offsets past i32::MAX cannot be placed; stop there.
        let count = (width / period as f32).ceil().min((i32::MAX / period) as f32 + 1.0) as i32;
        Self {
            offsets: (0..count).map_while(|i| i.checked_mul(period)).collect(),
        }
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Track, fill and animated stripes for one bar.
#[derive(Clone, Debug)]
pub struct ProgressBarView {
    style: BarStyle,
    viewport: Viewport,
    layout: StripeLayout,
    animator: StripeAnimator,
}

impl ProgressBarView {
    pub fn new(style: BarStyle, viewport: Viewport) -> Self {
        let layout = StripeLayout::compute(viewport.width, &style);
        let animator = StripeAnimator::new(style.stripe_width);
        debug!(width = viewport.width, stripes = layout.len(), "progress bar created");
        Self {
            style,
            viewport,
            layout,
            animator,
        }
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &StripeLayout {
        &self.layout
    }

    pub fn delta(&self) -> i32 {
        self.animator.delta()
    }

    /// Host layout changed; recompute the stripe slots.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.layout = StripeLayout::compute(viewport.width, &self.style);
        debug!(
            width = viewport.width,
            height = viewport.height,
            stripes = self.layout.len(),
            "progress bar resized"
        );
    }

    /// Advance the stripe animation to wall-clock time `now` (seconds).
    pub fn tick(&mut self, now: f64) {
        self.animator.tick(now);
    }

    /// Width of the filled part for the given progress.
    pub fn filled_width(&self, progress: f32) -> f32 {
        progress * self.viewport.width
    }

    /// Draw commands for the current frame, back to front.
    pub fn render<P: ProgressSource + ?Sized>(&self, source: &P) -> Vec<DrawCommand> {
        let progress = source.progress().clamp(0.0, 1.0);
        let mut commands = Vec::with_capacity(self.layout.len() + 2);

        commands.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height),
            color: self.style.track_color,
        });
        commands.push(bar::bar_command(progress, self.viewport.width, &self.style));

        // Stripe geometry lives on the whole-unit grid.
        let max_x = self.filled_width(progress).floor();
        let delta = self.animator.delta();
        for &offset in self.layout.offsets() {
            let quad = StripeQuad::new(offset.saturating_add(delta), &self.style);
            let polygon = clip_stripe(&quad, max_x);
            if polygon.is_empty() {
                continue;
            }
            commands.push(DrawCommand::FillPath {
                path: polygon.to_path(),
                color: self.style.stripe_color,
                opacity: self.style.stripe_opacity,
            });
        }
        commands
    }
}

/// One frame of a default-styled bar at wall-clock time `time` (seconds).
pub fn render(progress: f32, viewport: Viewport, time: f64) -> Vec<DrawCommand> {
    let mut view = ProgressBarView::new(BarStyle::default(), viewport);
    view.tick(time);
    view.render(&progress)
}
