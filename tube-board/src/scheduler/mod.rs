//! The board's control loop.
//!
//! After a one-off connecting phase the scheduler runs forever, one tick at
//! a time. A tick is:
//!
//! 1. fetch status and arrivals, if the fetch interval has elapsed
//! 2. reconcile the result with the [`ArrivalCache`]
//! 3. render either the next page of arrivals, the "no trains" screen or
//!    the fetch error
//! 4. sleep for the scroll delay
//! 5. every `legal_notice_ticks` ticks, show the attribution messages
//!
//! Nothing that goes wrong inside a tick escapes it. A failed fetch is
//! retried on the next tick; the fetch interval only restarts once a fetch
//! has produced something worth showing.

mod clock;
mod config;


use tracing::{debug, info, warn};

use crate::cache::{ArrivalCache, CacheOutcome};
use crate::display::BoardDisplay;
use crate::domain::{ArrivalList, Color, DisruptionStatus};
use crate::pager::Pager;
use crate::source::DataSource;
use crate::tfl::TflError;

pub use clock::{Cadence, Clock, TokioClock};
pub use config::SchedulerConfig;

/// Attribution required by the TfL open data licence, shown in this order.
pub const LEGAL_NOTICES: [&str; 3] = [
    "Powered by TfL Open Data",
    "Contains OS data \u{a9} Crown copyright and database rights 2016",
    "Contains Geomni UK Map data \u{a9} and database rights [2019]",
];

/// Shown when there are no arrivals to display.
pub const NO_TRAINS: [&str; 2] = ["No trains", "Check again soon"];

const ERROR_HEADING: &str = "API ERROR";
const CONNECTING: &str = "Connecting...";
const CONNECTED: &str = "Connected!";

/// Lifecycle of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connecting,
    Running,
}

/// What a tick put on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A page of arrivals starting at `offset`.
    Rendered { offset: usize, shown: usize },
    /// A full-screen message instead of arrivals; the page did not advance.
    ShortCircuited(ShortCircuit),
}

/// Why a tick skipped the arrivals view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortCircuit {
    /// Nothing cached and nothing fetched.
    NoTrains,
    /// The fetch failed with this message.
    FetchFailed(String),
}

/// Drives a [`DataSource`] and a [`BoardDisplay`] on a [`Clock`].
pub struct Scheduler<S, D, C> {
    source: S,
    display: D,
    clock: C,
    config: SchedulerConfig,
    phase: Phase,
    cache: ArrivalCache,
    status: DisruptionStatus,
    pager: Pager,
    fetch_timer: Cadence,
    ticks_since_notice: u32,
}

impl<S: DataSource, D: BoardDisplay, C: Clock> Scheduler<S, D, C> {
    pub fn new(source: S, display: D, clock: C, config: SchedulerConfig) -> Self {
        Self {
            source,
            display,
            clock,
            cache: ArrivalCache::new(config.empty_fetch_threshold),
            pager: Pager::new(config.page_size),
            fetch_timer: Cadence::new(config.fetch_interval),
            config,
            phase: Phase::Connecting,
            status: DisruptionStatus::default(),
            ticks_since_notice: 0,
        }
    }

    /// Connect, then tick forever.
    pub async fn run(&mut self) {
        self.connect().await;
        loop {
            self.tick().await;
        }
    }

    /// Show the connecting screen until the source is reachable.
    pub async fn connect(&mut self) {
        info!("Connecting");
        self.display.render_lines(&[CONNECTING], Color::MAGENTA);

        let mut attempts: u32 = 1;
        while let Err(e) = self.source.connect().await {
            warn!(attempt = attempts, error = %e, "Connection attempt failed");
            self.clock.sleep(self.config.connect_retry).await;
            attempts += 1;
        }

        self.display.render_lines(&[CONNECTED], Color::GREEN);
        self.clock.sleep(self.config.connected_hold).await;
        self.phase = Phase::Running;
        info!(attempts, "Connected");
    }

    /// Run one iteration of the board loop.
    pub async fn tick(&mut self) -> TickOutcome {
        let outcome = self.refresh_and_render().await;

        self.clock.sleep(self.config.scroll_delay).await;

        self.ticks_since_notice += 1;
        if self.ticks_since_notice >= self.config.legal_notice_ticks {
            self.show_legal_notice().await;
            self.ticks_since_notice = 0;
        }

        outcome
    }

    async fn refresh_and_render(&mut self) -> TickOutcome {
        let now = self.clock.now();
        let fetched = if self.fetch_timer.is_due(now) {
            Some(self.fetch().await)
        } else {
            None
        };
        let attempted = fetched.is_some();

        let outcome = match fetched {
            Some(Ok((status, arrivals))) => {
                self.status = status;
                self.cache.update(Ok(arrivals))
            }
            Some(Err(e)) => self.cache.update(Err(e)),
            None => self.cache.current(),
        };

        match outcome {
            CacheOutcome::Active(list) | CacheOutcome::StaleButUsable(list) => {
                if attempted {
                    self.fetch_timer.reset(now);
                }
                let (offset, page) = self.pager.next_page(list);
                self.display.render_arrivals(page, self.status.color());
                debug!(offset, shown = page.len(), total = list.len(), "Rendered arrivals");
                TickOutcome::Rendered {
                    offset,
                    shown: page.len(),
                }
            }
            CacheOutcome::Exhausted => {
                debug!("No arrivals to show");
                self.display.render_lines(&NO_TRAINS, Color::RED);
                TickOutcome::ShortCircuited(ShortCircuit::NoTrains)
            }
            CacheOutcome::FetchError(e) => {
                warn!(error = %e, "Fetch failed, will retry next tick");
                let message = e.to_string();
                self.display
                    .render_lines(&[ERROR_HEADING, message.as_str()], Color::RED);
                TickOutcome::ShortCircuited(ShortCircuit::FetchFailed(message))
            }
        }
    }

    async fn fetch(&self) -> Result<(DisruptionStatus, ArrivalList), TflError> {
        let status = self.source.fetch_disruption_status().await?;
        let arrivals = self.source.fetch_arrivals().await?;
        info!(status = %status, arrivals = arrivals.len(), "Fetched board data");
        Ok((status, arrivals))
    }

    async fn show_legal_notice(&mut self) {
        info!("Showing legal notice");
        for message in LEGAL_NOTICES {
            self.display.render_lines(&[message], Color::TEXT);
            self.clock.sleep(self.config.legal_message_delay).await;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cache(&self) -> &ArrivalCache {
        &self.cache
    }

    /// Status from the most recent successful fetch.
    pub fn status(&self) -> &DisruptionStatus {
        &self.status
    }

    pub fn ticks_since_notice(&self) -> u32 {
        self.ticks_since_notice
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
