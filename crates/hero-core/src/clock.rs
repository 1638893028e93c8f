//! Explicit frame time.
//!
//! Every per-frame update receives a [`FrameTime`] sampled once by the
//! render loop, so all objects in a frame observe the same `elapsed` value
//! and tests can drive the scene with synthetic times.

use crate::constants::MAX_FRAME_DELTA;
use instant::Instant;

/// One sampled instant of the render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous sample, clamped to [`MAX_FRAME_DELTA`].
    pub delta: f32,
    /// Number of samples taken before this one.
    pub frame: u64,
}

impl FrameTime {
    /// A frame at an absolute elapsed time with no history.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            delta: 0.0,
            frame: 0,
        }
    }
}

#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_elapsed: Option<f32>,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_elapsed: None,
            frames: 0,
        }
    }

    /// Sample the wall clock.
    pub fn sample(&mut self) -> FrameTime {
        let elapsed = self.start.elapsed().as_secs_f32();
        self.advance_to(elapsed)
    }

    /// Produce the next frame at a caller-provided elapsed time.
    pub fn advance_to(&mut self, elapsed: f32) -> FrameTime {
        let delta = match self.last_elapsed {
            Some(prev) => (elapsed - prev).clamp(0.0, MAX_FRAME_DELTA),
            None => 0.0,
        };
        let time = FrameTime {
            elapsed,
            delta,
            frame: self.frames,
        };
        self.last_elapsed = Some(elapsed);
        self.frames += 1;
        time
    }

    /// Restart from zero; subsequent frames reproduce the same timeline.
    pub fn reset(&mut self) {
        self.start = Instant::now();
        self.last_elapsed = None;
        self.frames = 0;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_clamped_after_a_stall() {
        let mut clock = FrameClock::new();
        let first = clock.advance_to(1.0);
        assert_eq!(first.delta, 0.0);
        let second = clock.advance_to(6.0);
        assert!((second.delta - MAX_FRAME_DELTA).abs() < 1e-6);
        assert_eq!(second.frame, 1);
    }

    #[test]
    fn reset_restarts_frame_numbering() {
        let mut clock = FrameClock::new();
        clock.advance_to(0.5);
        clock.advance_to(0.6);
        clock.reset();
        let t = clock.advance_to(0.0);
        assert_eq!(t.frame, 0);
        assert_eq!(t.delta, 0.0);
    }
}
