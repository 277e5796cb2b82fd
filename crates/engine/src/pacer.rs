//! Fixed-cadence waiting between ticks.

use std::time::{Duration, Instant};

/// Something that can wait out the rest of a tick.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Sleeps so that consecutive `pause` calls return about `interval` apart.
///
/// Time spent simulating and drawing since the previous call is deducted, so
/// the tick rate does not drift with frame cost.
#[derive(Debug)]
pub struct SleepPacer {
    last: Instant,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, interval: Duration) {
        let remaining = interval
            .checked_sub(self.last.elapsed())
            .unwrap_or(Duration::ZERO);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Never waits; records each requested pause. For headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct NoopPacer {
    pub pauses: Vec<Duration>,
}

impl NoopPacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for NoopPacer {
    fn pause(&mut self, interval: Duration) {
        self.pauses.push(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_pacer_waits_at_least_the_remainder() {
        let mut pacer = SleepPacer::new();
        let start = Instant::now();
        pacer.pause(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn sleep_pacer_skips_when_overdue() {
        let mut pacer = SleepPacer::new();
        std::thread::sleep(Duration::from_millis(10));
        let start = Instant::now();
        pacer.pause(Duration::from_millis(1));
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn noop_pacer_records() {
        let mut pacer = NoopPacer::new();
        pacer.pause(Duration::from_millis(50));
        pacer.pause(Duration::from_millis(2000));
        assert_eq!(
            pacer.pauses,
            vec![Duration::from_millis(50), Duration::from_millis(2000)]
        );
    }
}
