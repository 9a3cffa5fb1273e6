//! Frame-rate limiter

use std::time::{Duration, Instant};

/// Number of frame timestamps used for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Caps the loop at a target frame rate by sleeping off the remainder of
/// each frame, and measures the rate actually achieved.
#[derive(Debug)]
pub struct FrameClock {
    frame_time: Duration,
    last: Option<Instant>,
    // Ring of recent frame end times
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            last: None,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Target duration of one frame
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Block until one frame time has passed since the previous call.
    ///
    /// Returns the time elapsed since the previous call, sleep included.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = match self.last {
            Some(last) => {
                let busy = now - last;
                if busy < self.frame_time {
                    std::thread::sleep(self.frame_time - busy);
                }
                Instant::now() - last
            }
            None => Duration::ZERO,
        };

        let end = Instant::now();
        self.last = Some(end);
        self.record(end);
        elapsed
    }

    fn record(&mut self, end: Instant) {
        self.frame_times[self.frame_index] = Some(end);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry sits where the next write goes
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let window = (end - oldest).as_secs_f64();
            if window > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / window).round() as u32;
            }
        }
    }

    /// Measured frames per second (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
