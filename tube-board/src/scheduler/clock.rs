//! Time source for the scheduler.

use std::time::Duration;

use tokio::time::Instant;

/// Monotonic time plus the ability to wait.
///
/// The board loop never reads the system clock directly, so tests can drive
/// it with a clock that advances instantly.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> Instant;

    async fn sleep(&mut self, duration: Duration);
}

/// Real time, via tokio's timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A recurring deadline.
///
/// Starts out due, so the first check always fires.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_none_or(|due| now >= due)
    }

    /// Restart the interval from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_due_immediately_then_after_interval() {
        let start = Instant::now();
        let mut cadence = Cadence::new(Duration::from_secs(30));
        assert!(cadence.is_due(start));

        cadence.reset(start);
        assert!(!cadence.is_due(start));
        assert!(!cadence.is_due(start + Duration::from_secs(29)));
        assert!(cadence.is_due(start + Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn tokio_clock_sleeps() {
        let mut clock = TokioClock;
        let before = clock.now();
        clock.sleep(Duration::from_millis(5)).await;
        assert!(clock.now() >= before + Duration::from_millis(5));
    }
}
