//! Marching Ants demo host.
//!
//! Drives a progress bar through a frame loop the way a UI event loop would:
//! the progress value sweeps from empty to full like a dragged slider, the
//! stripe animation ticks at the style's rate, and every frame is written out
//! as a PNG.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use marching_ants::{
    theme, BarStyle, FrameClock, FrameTicker, ProgressBarView, Rasterizer, SharedProgress,
    Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "marching-ants-demo", about = "Render the marching ants progress bar to PNG frames")]
struct Args {
    /// Bar width in pixels
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// Number of frames to render
    #[arg(long, default_value_t = 48)]
    frames: u32,

    /// Host frame rate; defaults to the style's tick rate
    #[arg(long)]
    fps: Option<f64>,

    /// Output directory for frame_NNNN.png files
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// JSON style file
    #[arg(long)]
    style: Option<PathBuf>,

    /// Hold progress at a fixed value instead of sweeping 0..1
    #[arg(long)]
    progress: Option<f32>,

    /// Pace frames against the wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let style = match &args.style {
        Some(path) => BarStyle::load(path).with_context(|| format!("loading style {}", path.display()))?,
        None => BarStyle::default(),
    };
    let fps = args.fps.unwrap_or(style.tick_hz);
    anyhow::ensure!(fps > 0.0, "fps must be positive, got {fps}");

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let mut raster = Rasterizer::new(args.width, style.height.ceil() as u32).context("creating rasterizer")?;
    let viewport = Viewport::new(raster.width() as f32, raster.height() as f32);
    let mut view = ProgressBarView::new(style, viewport);
    let mut frame_loop = FrameLoop::new(view.style().tick_hz);
    let progress = SharedProgress::new(args.progress.unwrap_or(0.0));

    let clock = FrameClock::new();
    let frame_duration = Duration::from_secs_f64(1.0 / fps);

    info!(
        width = raster.width(),
        frames = args.frames,
        fps,
        out = %args.out.display(),
        "Entering frame loop"
    );

    for frame in 0..args.frames {
        let started = clock.seconds();

        // Slider stand-in
        if args.progress.is_none() {
            progress.set(sweep_progress(frame, args.frames));
        }

        let now = if args.realtime {
            started
        } else {
            simulated_time(frame, fps)
        };
        frame_loop.step(&mut view, now);

        raster.clear(theme::TRANSPARENT);
        raster.draw(&view.render(&progress));

        let path = args.out.join(format!("frame_{frame:04}.png"));
        raster
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        debug!(frame, delta = view.delta(), path = %path.display(), "frame written");

        if args.realtime {
            let elapsed = Duration::from_secs_f64(clock.seconds() - started);
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            }
        }
    }

    info!(frames = args.frames, "Done");
    Ok(())
}

/// Progress for `frame` of `frames`: 0 on the first frame, 1 on the last.
fn sweep_progress(frame: u32, frames: u32) -> f32 {
    let denom = frames.saturating_sub(1).max(1);
    (frame as f32 / denom as f32).min(1.0)
}

/// Simulated clock: frame `n` is shown at the end of its frame interval.
fn simulated_time(frame: u32, fps: f64) -> f64 {
    f64::from(frame + 1) / fps
}

/// Feeds host frame times into the tick scheduler.
struct FrameLoop {
    ticker: FrameTicker,
    last_frame: f64,
}

impl FrameLoop {
    fn new(tick_hz: f64) -> Self {
        Self {
            ticker: FrameTicker::new(tick_hz),
            last_frame: 0.0,
        }
    }

    /// Advance to host time `now`; ticks the view when a tick fell due.
    fn step(&mut self, view: &mut ProgressBarView, now: f64) -> bool {
        let dt = now - self.last_frame;
        self.last_frame = now;
        let due = self.ticker.advance(dt) > 0;
        if due {
            view.tick(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ProgressBarView {
        ProgressBarView::new(BarStyle::default(), Viewport::new(200.0, 20.0))
    }

    #[test]
    fn sweep_runs_from_empty_to_full() {
        assert_eq!(sweep_progress(0, 48), 0.0);
        assert_eq!(sweep_progress(47, 48), 1.0);
        assert!(sweep_progress(20, 48) < sweep_progress(21, 48));
    }

    #[test]
    fn sweep_with_single_frame() {
        assert_eq!(sweep_progress(0, 1), 0.0);
        assert_eq!(sweep_progress(0, 0), 0.0);
    }

    #[test]
    fn simulated_time_advances_one_interval_per_frame() {
        assert_eq!(simulated_time(0, 24.0), 1.0 / 24.0);
        assert_eq!(simulated_time(23, 24.0), 1.0);
    }

    #[test]
    fn ticks_once_per_interval_at_matching_rate() {
        let mut frame_loop = FrameLoop::new(24.0);
        let mut view = view();
        for frame in [0, 1, 2] {
            assert!(frame_loop.step(&mut view, simulated_time(frame, 24.0) + 1e-9));
        }
    }

    #[test]
    fn fast_host_skips_ticks_between_intervals() {
        // 60 fps host against a 24 Hz tick: at most one tick per frame, 24 per second.
        let mut frame_loop = FrameLoop::new(24.0);
        let mut view = view();
        let ticked = (0..60)
            .filter(|&frame| frame_loop.step(&mut view, simulated_time(frame, 60.0)))
            .count();
        assert!((23..=24).contains(&ticked), "ticked {ticked}");
    }

    #[test]
    fn tick_updates_view_delta() {
        let mut frame_loop = FrameLoop::new(24.0);
        let mut view = view();
        assert_eq!(view.delta(), 0);

        // Half a second of wall clock in one realtime frame.
        assert!(frame_loop.step(&mut view, 0.5));
        assert_eq!(view.delta(), -20);

        // A frame too soon for the next tick leaves the delta alone.
        assert!(!frame_loop.step(&mut view, 0.51));
        assert_eq!(view.delta(), -20);
    }
}
