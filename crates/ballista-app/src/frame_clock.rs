//! Fixed-rate frame pacing.
//!
//! The flight step is expressed per frame, so the host emulates a display with
//! a fixed refresh rate: wall-clock time accumulates and is paid out in whole
//! frames of `1 / frame_rate` seconds.

use std::time::{Duration, Instant};

use tracing::warn;

/// Longest wall-clock gap credited in one poll. Anything longer is dropped so
/// a stalled host does not replay hundreds of frames at once.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator that converts elapsed time into a count of due frames.
#[derive(Debug)]
pub struct FrameClock {
    frame_dt: f64,
    accumulator: f64,
    previous: Instant,
    frames: u64,
}

impl FrameClock {
    /// A clock ticking at `frame_rate` Hz (at least 1), starting now.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_dt: 1.0 / f64::from(frame_rate.max(1)),
            accumulator: 0.0,
            previous: Instant::now(),
            frames: 0,
        }
    }

    /// Seconds per frame.
    pub fn frame_dt(&self) -> f64 {
        self.frame_dt
    }

    /// Total frames paid out so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Measure wall time since the last poll and return how many frames are due.
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        self.advance(elapsed)
    }

    /// Credit `elapsed` seconds and return how many whole frames are due.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        let mut elapsed = elapsed.max(0.0);
        if elapsed > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                elapsed * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            elapsed = MAX_FRAME_TIME;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.frame_dt {
            self.accumulator -= self.frame_dt;
            due += 1;
        }
        self.frames += u64::from(due);
        due
    }

    /// Time left until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        Duration::from_secs_f64((self.frame_dt - self.accumulator).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dt() {
        let clock = FrameClock::new(60);
        assert!((clock.frame_dt() - 1.0 / 60.0).abs() < 1e-15);
        assert!((FrameClock::new(0).frame_dt() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_single_frame() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut clock = FrameClock::new(50);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(0.05), 2);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut clock = FrameClock::new(60);
        let due = clock.advance(5.0);
        assert!(due <= (MAX_FRAME_TIME * 60.0).ceil() as u32);
        assert!(due > 0);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn test_until_next_frame_shrinks() {
        let mut clock = FrameClock::new(10);
        let full = clock.until_next_frame();
        clock.advance(0.04);
        assert!(clock.until_next_frame() < full);
    }

    #[test]
    fn test_deterministic_sequence() {
        let times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        let mut a = FrameClock::new(60);
        let mut b = FrameClock::new(60);
        for &t in &times {
            assert_eq!(a.advance(t), b.advance(t));
        }
        assert_eq!(a.frames(), b.frames());
    }
}
