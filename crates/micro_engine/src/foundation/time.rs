//! Frame timing
//!
//! The frame clock enforces a minimum amount of time between frames so the
//! elapsed time handed to game objects can never be zero or vanishingly
//! small, which would risk numeric degeneracy in their movement code. The
//! floor is a lower bound on timing precision, not a frame-rate cap: a slow
//! frame still reports its full (optionally clamped) elapsed time.

use std::thread;
use std::time::{Duration, Instant};

/// Default minimum inter-frame interval
pub const DEFAULT_MIN_FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Default ceiling on the elapsed time reported for a single frame
pub const DEFAULT_MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame clock gating the main loop
///
/// Owns the start time of the previous frame. Each call to
/// [`FrameClock::wait_for_frame`] blocks (sleeping in 1 ms slices and
/// re-sampling the clock) until the minimum interval has passed, then
/// reports the elapsed time in seconds.
pub struct FrameClock {
    min_frame_interval: Duration,
    max_frame_delta: Option<Duration>,
    previous_frame_start: Instant,
    frame_count: u64,
    total_time: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FRAME_INTERVAL, Some(DEFAULT_MAX_FRAME_DELTA))
    }
}

impl FrameClock {
    /// Create a new frame clock
    ///
    /// `max_frame_delta` caps the elapsed time reported after a stalled
    /// frame; `None` disables the cap and a stall produces one large
    /// catch-up step.
    pub fn new(min_frame_interval: Duration, max_frame_delta: Option<Duration>) -> Self {
        Self {
            min_frame_interval,
            max_frame_delta,
            previous_frame_start: Instant::now(),
            frame_count: 0,
            total_time: 0.0,
        }
    }

    /// Block until the minimum interval since the previous frame has
    /// elapsed, then start the new frame
    ///
    /// Returns the elapsed time since the previous frame start in seconds.
    /// The value is strictly positive and at least
    /// `min_frame_interval` seconds; with a configured ceiling it is at
    /// most `max_frame_delta` seconds.
    pub fn wait_for_frame(&mut self) -> f32 {
        let mut frame_start = Instant::now();
        while frame_start.duration_since(self.previous_frame_start) < self.min_frame_interval {
            thread::sleep(Duration::from_millis(1));
            frame_start = Instant::now();
        }

        let mut delta = frame_start.duration_since(self.previous_frame_start);
        if let Some(ceiling) = self.max_frame_delta {
            if delta > ceiling {
                log::debug!(
                    "Frame stalled for {:.0} ms, clamping elapsed time to {:.0} ms",
                    delta.as_secs_f64() * 1000.0,
                    ceiling.as_secs_f64() * 1000.0
                );
                delta = ceiling;
            }
        }
        self.previous_frame_start = frame_start;

        let elapsed = delta.as_secs_f32();
        self.frame_count += 1;
        self.total_time += elapsed;
        elapsed
    }

    /// Get the minimum inter-frame interval
    pub fn min_frame_interval(&self) -> Duration {
        self.min_frame_interval
    }

    /// Get the number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the total elapsed time accumulated over all frames
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the average FPS over the clock's lifetime
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_time_respects_floor() {
        let min = Duration::from_millis(10);
        let mut clock = FrameClock::new(min, None);

        for _ in 0..5 {
            let elapsed = clock.wait_for_frame();
            assert!(elapsed > 0.0);
            assert!(elapsed >= min.as_secs_f32());
        }
        assert_eq!(clock.frame_count(), 5);
    }

    #[test]
    fn test_elapsed_time_clamped_after_stall() {
        let ceiling = Duration::from_millis(30);
        let mut clock = FrameClock::new(Duration::from_millis(1), Some(ceiling));

        thread::sleep(Duration::from_millis(60));
        let elapsed = clock.wait_for_frame();
        assert!(elapsed <= ceiling.as_secs_f32() + f32::EPSILON);
    }

    #[test]
    fn test_stall_unclamped_without_ceiling() {
        let mut clock = FrameClock::new(Duration::from_millis(1), None);

        thread::sleep(Duration::from_millis(40));
        let elapsed = clock.wait_for_frame();
        assert!(elapsed >= 0.04);
    }

    #[test]
    fn test_average_fps_accumulates() {
        let mut clock = FrameClock::new(Duration::from_millis(5), None);
        for _ in 0..3 {
            clock.wait_for_frame();
        }
        assert!(clock.total_time() > 0.0);
        assert!(clock.average_fps() > 0.0);
    }
}
