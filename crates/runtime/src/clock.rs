//! Frame pacing.
//!
//! A [`Clock`] decides when the next frame starts; the simulation itself is
//! oblivious to wall time.
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Source of frame boundaries.
#[async_trait]
pub trait Clock: Send {
    /// Resolves when the next frame should be simulated.
    async fn next_frame(&mut self);
}

/// Wall-clock pacing backed by a tokio interval.
///
/// Late frames are skipped rather than bunched up, so a slow renderer lowers
/// the frame rate instead of fast-forwarding the board afterwards.
#[derive(Debug)]
pub struct IntervalClock {
    interval: Interval,
}

impl IntervalClock {
    /// Must be called from within a tokio runtime. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

#[async_trait]
impl Clock for IntervalClock {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Clock that never waits. Used by tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    frames: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames handed out so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[async_trait]
impl Clock for ManualClock {
    async fn next_frame(&mut self) {
        self.frames += 1;
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_clock_counts_frames() {
        let mut clock = ManualClock::new();
        for _ in 0..3 {
            clock.next_frame().await;
        }
        assert_eq!(clock.frames(), 3);
    }

    #[tokio::test]
    async fn interval_clock_waits_between_frames() {
        let period = Duration::from_millis(5);
        let mut clock = IntervalClock::new(period);
        assert_eq!(clock.period(), period);

        let started = time::Instant::now();
        // The first tick completes immediately.
        for _ in 0..3 {
            clock.next_frame().await;
        }
        assert!(started.elapsed() >= period * 2);
    }
}
