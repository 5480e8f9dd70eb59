//! Gravity cadence for frame-based drivers
//!
//! The engine itself has no notion of time. A driver running at
//! [`FRAME_RATE`] frames per second asks this clock, once per frame, whether
//! the frame should carry a gravity tick.

use crate::types::{FRAME_COUNTER_WRAP, FRAME_RATE};

/// Frames between gravity ticks at `level` (never less than 1)
pub fn gravity_period_frames(level: u32) -> u32 {
    (FRAME_RATE / level.max(1) / 2).max(1)
}

/// Frame counter that fires every `gravity_period_frames(level)` frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    counter: u32,
    period: u32,
}

impl GravityClock {
    pub fn new(level: u32) -> Self {
        Self {
            counter: 0,
            period: gravity_period_frames(level),
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Advance one frame; true when this frame should apply gravity
    ///
    /// A held soft drop makes every frame a gravity frame.
    pub fn advance(&mut self, soft_drop: bool) -> bool {
        self.counter += 1;
        if self.counter > FRAME_COUNTER_WRAP {
            self.counter = 0;
        }
        self.counter % self.period == 0 || soft_drop
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
