//! Progress read channel.
//!
//! The progress value is owned by whatever control drives it (a slider, a
//! download loop). The bar only reads it, once per rendered frame.

use std::cell::Cell;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Something the bar can read a progress fraction from.
pub trait ProgressSource {
    /// Current progress, expected in [0,1].
    fn progress(&self) -> f32;
}

impl ProgressSource for f32 {
    fn progress(&self) -> f32 {
        *self
    }
}

impl ProgressSource for Cell<f32> {
    fn progress(&self) -> f32 {
        self.get()
    }
}

impl<T: ProgressSource + ?Sized> ProgressSource for &T {
    fn progress(&self) -> f32 {
        (**self).progress()
    }
}

/// Progress value shared with a writer on another thread.
///
/// Stores the `f32` bit pattern in an atomic; clones share the same value.
#[derive(Clone, Debug, Default)]
pub struct SharedProgress(Arc<AtomicU32>);

impl SharedProgress {
    pub fn new(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl ProgressSource for SharedProgress {
    fn progress(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}
