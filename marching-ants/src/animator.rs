//! Stripe animation.
//!
//! All stripes share one horizontal delta derived from wall-clock time. The
//! delta sweeps `[-2w, 0)` once per second and snaps back at each whole
//! second; since stripes sit `2w` apart the pattern appears to scroll
//! continuously.
//!
//! There is no timer here. A host calls [`FrameTicker::advance`] with the
//! time since its last frame and [`StripeAnimator::tick`] when a tick is due.

use tracing::trace;

/// Horizontal stripe delta at `seconds` for stripes `stripe_width` wide.
pub fn stripe_delta(seconds: f64, stripe_width: i32) -> i32 {
    let period = stripe_width.saturating_mul(2);
    let phase = seconds.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    let step = ((phase * f64::from(period)).floor() as i32).min(period.saturating_sub(1));
    step.saturating_sub(period)
}

/// Holds the current delta between ticks.
#[derive(Clone, Debug)]
pub struct StripeAnimator {
    stripe_width: i32,
    delta: i32,
}

impl StripeAnimator {
    pub fn new(stripe_width: i32) -> Self {
        Self {
            stripe_width,
            delta: 0,
        }
    }

    /// Recompute the delta for wall-clock time `now` (seconds).
    pub fn tick(&mut self, now: f64) -> i32 {
        self.delta = stripe_delta(now, self.stripe_width);
        trace!(now, delta = self.delta, "stripe tick");
        self.delta
    }

    pub fn delta(&self) -> i32 {
        self.delta
    }
}

/// Fixed-rate tick scheduler.
///
/// Accumulates elapsed time and reports how many ticks fell due, carrying the
/// remainder into the next call.
#[derive(Clone, Debug)]
pub struct FrameTicker {
    interval: f64,
    accumulated: f64,
}

impl FrameTicker {
    pub fn new(hz: f64) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulated: 0.0,
        }
    }

    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.accumulated += elapsed.max(0.0);
        let due = (self.accumulated / self.interval).floor();
        self.accumulated -= due * self.interval;
        due as u32
    }
}

/// Seconds since construction, for hosts driving the bar in real time.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: instant::Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }

    pub fn seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_range() {
        assert_eq!(stripe_delta(0.0, 20), -40);
        assert_eq!(stripe_delta(0.5, 20), -20);
        assert_eq!(stripe_delta(0.999, 20), -1);
        assert_eq!(stripe_delta(7.25, 20), -30);
        assert_eq!(stripe_delta(-1e-20, 20), -1);
        assert_eq!(stripe_delta(-0.25, 20), -10);
    }

    #[test]
    fn delta_sweeps_once_per_second_at_24hz() {
        let samples: Vec<i32> = (0..=48).map(|i| stripe_delta(f64::from(i) / 24.0, 20)).collect();

        for second in samples.chunks(24) {
            for pair in second.windows(2) {
                assert!(pair[1] > pair[0], "{second:?}");
            }
            assert!(second.iter().all(|d| (-40..0).contains(d)));
        }
        assert_eq!(samples[0], -40);
        assert_eq!(samples[24], -40);
        assert_eq!(samples[48], -40);
        assert!(samples[23] > samples[24]);
    }

    #[test]
    fn animator_starts_at_zero_and_follows_ticks() {
        let mut animator = StripeAnimator::new(20);
        assert_eq!(animator.delta(), 0);
        assert_eq!(animator.tick(3.5), -20);
        assert_eq!(animator.delta(), -20);
    }

    #[test]
    fn ticker_carries_remainder() {
        let mut ticker = FrameTicker::new(24.0);
        assert_eq!(ticker.advance(0.01), 0);
        assert_eq!(ticker.advance(0.04), 1);
        assert_eq!(ticker.advance(0.5), 12);
        assert_eq!(ticker.advance(-1.0), 0);
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.seconds();
        let b = clock.seconds();
        assert!(b >= a && a >= 0.0);
    }
}
