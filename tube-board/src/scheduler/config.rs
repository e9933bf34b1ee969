//! Timing and paging configuration for the scheduler.

use std::time::Duration;

use crate::cache::DEFAULT_EMPTY_FETCH_THRESHOLD;
use crate::pager::DEFAULT_PAGE_SIZE;

/// Configuration parameters for the board loop.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Minimum time between API fetches.
    pub fetch_interval: Duration,

    /// Sleep at the end of every tick. This is the loop's only cadence;
    /// fetches and page flips both happen on tick boundaries.
    pub scroll_delay: Duration,

    /// Arrivals shown per page.
    pub page_size: usize,

    /// Consecutive empty fetches before stale arrivals are dropped.
    pub empty_fetch_threshold: u32,

    /// Ticks between attribution notices.
    pub legal_notice_ticks: u32,

    /// How long each attribution message stays up.
    pub legal_message_delay: Duration,

    /// Wait between connection attempts during startup.
    pub connect_retry: Duration,

    /// How long the "Connected!" screen stays up.
    pub connected_hold: Duration,
}

impl SchedulerConfig {
    /// Returns the config with a different fetch interval.
    pub fn with_fetch_interval(mut self, interval: Duration) -> Self {
        self.fetch_interval = interval;
        self
    }

    /// Returns the config with a different tick delay.
    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    /// Returns the config with a different legal notice interval.
    pub fn with_legal_notice_ticks(mut self, ticks: u32) -> Self {
        self.legal_notice_ticks = ticks;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            fetch_interval: Duration::from_secs(30),
            scroll_delay: Duration::from_secs(5),
            page_size: DEFAULT_PAGE_SIZE,
            empty_fetch_threshold: DEFAULT_EMPTY_FETCH_THRESHOLD,
            legal_notice_ticks: 720, // one hour of 5 s ticks
            legal_message_delay: Duration::from_secs(5),
            connect_retry: Duration::from_secs(1),
            connected_hold: Duration::from_secs(1),
        }
    }
}
