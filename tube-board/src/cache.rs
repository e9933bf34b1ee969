//! Last-known arrivals and the rules for falling back to them.
//!
//! Three situations must not be confused:
//! - the fetch failed: keep whatever we had, the next fetch may succeed
//! - the API says there are no trains: believe it, but only after it has
//!   said so several fetches in a row
//! - there is nothing to show at all
//!
//! The cache is owned by the scheduler and only changes after a fetch.

use tracing::{debug, info};

use crate::domain::{Arrival, ArrivalList};
use crate::tfl::TflError;

/// Consecutive empty fetches after which cached arrivals are dropped.
pub const DEFAULT_EMPTY_FETCH_THRESHOLD: u32 = 6;

/// What the board should show after a cache update.
#[derive(Debug)]
pub enum CacheOutcome<'a> {
    /// Fresh arrivals from the last fetch.
    Active(&'a [Arrival]),
    /// The fetch came back empty; showing older arrivals while we re-check.
    StaleButUsable(&'a [Arrival]),
    /// No arrivals to show.
    Exhausted,
    /// The fetch failed. The cache is unchanged.
    FetchError(TflError),
}

impl CacheOutcome<'_> {
    /// Arrivals to render, if any.
    pub fn arrivals(&self) -> Option<&[Arrival]> {
        match self {
            CacheOutcome::Active(list) | CacheOutcome::StaleButUsable(list) => Some(*list),
            CacheOutcome::Exhausted | CacheOutcome::FetchError(_) => None,
        }
    }
}

/// Last successfully fetched arrivals.
#[derive(Debug, Clone)]
pub struct ArrivalCache {
    last_known: ArrivalList,
    consecutive_empty_fetches: u32,
    empty_threshold: u32,
}

impl ArrivalCache {
    /// Create an empty cache that gives up on stale data after
    /// `empty_threshold` empty fetches.
    pub fn new(empty_threshold: u32) -> Self {
        Self {
            last_known: ArrivalList::empty(),
            consecutive_empty_fetches: 0,
            empty_threshold,
        }
    }

    /// Reconcile a fetch result with what we already know.
    pub fn update(&mut self, result: Result<ArrivalList, TflError>) -> CacheOutcome<'_> {
        let arrivals = match result {
            Ok(arrivals) => arrivals,
            Err(e) => return CacheOutcome::FetchError(e),
        };

        if !arrivals.is_empty() {
            self.last_known = arrivals;
            self.consecutive_empty_fetches = 0;
            return CacheOutcome::Active(&self.last_known);
        }

        if self.last_known.is_empty() {
            return CacheOutcome::Exhausted;
        }

        self.consecutive_empty_fetches += 1;
        if self.consecutive_empty_fetches >= self.empty_threshold {
            info!(
                empty_fetches = self.consecutive_empty_fetches,
                "Dropping cached arrivals"
            );
            self.last_known = ArrivalList::empty();
            return CacheOutcome::Exhausted;
        }

        debug!(
            empty_fetches = self.consecutive_empty_fetches,
            cached = self.last_known.len(),
            "Empty fetch, keeping cached arrivals"
        );
        CacheOutcome::StaleButUsable(&self.last_known)
    }

    /// Outcome for a tick that didn't fetch.
    pub fn current(&self) -> CacheOutcome<'_> {
        if self.last_known.is_empty() {
            CacheOutcome::Exhausted
        } else {
            CacheOutcome::Active(&self.last_known)
        }
    }

    pub fn arrivals(&self) -> &ArrivalList {
        &self.last_known
    }

    pub fn consecutive_empty_fetches(&self) -> u32 {
        self.consecutive_empty_fetches
    }
}

impl Default for ArrivalCache {
    fn default() -> Self {
        Self::new(DEFAULT_EMPTY_FETCH_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[(&str, u32)]) -> ArrivalList {
        items.iter().map(|(d, s)| Arrival::new(*d, *s)).collect()
    }

    fn api_error() -> TflError {
        TflError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        }
    }

    #[test]
    fn non_empty_fetch_is_active() {
        let mut cache = ArrivalCache::default();
        let outcome = cache.update(Ok(list(&[("A", 0), ("B", 65), ("C", 40)])));

        assert!(matches!(outcome, CacheOutcome::Active(l) if l.len() == 3));
        assert_eq!(cache.arrivals()[1].destination_name, "C");
        assert_eq!(cache.consecutive_empty_fetches(), 0);
    }

    #[test]
    fn cold_start_empty_is_exhausted() {
        let mut cache = ArrivalCache::default();
        let outcome = cache.update(Ok(ArrivalList::empty()));

        assert!(matches!(outcome, CacheOutcome::Exhausted));
        assert_eq!(cache.consecutive_empty_fetches(), 0);
    }

    #[test]
    fn empty_fetches_use_stale_data_until_threshold() {
        let mut cache = ArrivalCache::default();
        cache.update(Ok(list(&[("A", 30)])));

        for n in 1..DEFAULT_EMPTY_FETCH_THRESHOLD {
            let outcome = cache.update(Ok(ArrivalList::empty()));
            assert!(matches!(outcome, CacheOutcome::StaleButUsable(_)));
            assert_eq!(outcome.arrivals().map(<[Arrival]>::len), Some(1));
            assert_eq!(cache.consecutive_empty_fetches(), n);
        }

        let outcome = cache.update(Ok(ArrivalList::empty()));
        assert!(matches!(outcome, CacheOutcome::Exhausted));
        assert!(cache.arrivals().is_empty());
        assert_eq!(cache.consecutive_empty_fetches(), DEFAULT_EMPTY_FETCH_THRESHOLD);
    }

    #[test]
    fn non_empty_fetch_resets_counter() {
        let mut cache = ArrivalCache::default();
        cache.update(Ok(list(&[("A", 30)])));
        cache.update(Ok(ArrivalList::empty()));
        cache.update(Ok(ArrivalList::empty()));
        assert_eq!(cache.consecutive_empty_fetches(), 2);

        cache.update(Ok(list(&[("B", 90)])));
        assert_eq!(cache.consecutive_empty_fetches(), 0);
        assert_eq!(cache.arrivals()[0].destination_name, "B");
    }

    #[test]
    fn failure_leaves_cache_alone() {
        let mut cache = ArrivalCache::default();
        cache.update(Ok(list(&[("A", 30), ("B", 90)])));
        cache.update(Ok(ArrivalList::empty()));

        let outcome = cache.update(Err(api_error()));
        assert!(matches!(outcome, CacheOutcome::FetchError(_)));
        assert!(outcome.arrivals().is_none());
        assert_eq!(cache.arrivals().len(), 2);
        assert_eq!(cache.consecutive_empty_fetches(), 1);
    }

    #[test]
    fn current_without_fetch() {
        let mut cache = ArrivalCache::default();
        assert!(matches!(cache.current(), CacheOutcome::Exhausted));

        cache.update(Ok(list(&[("A", 30)])));
        assert!(matches!(cache.current(), CacheOutcome::Active(l) if l.len() == 1));
    }

    fn arrivals_strategy() -> impl Strategy<Value = Vec<Arrival>> {
        prop::collection::vec(
            ("[A-Z][a-z]{0,8}", 0u32..3600).prop_map(|(d, s)| Arrival::new(d, s)),
            1..20,
        )
    }

    proptest! {
        #[test]
        fn success_stores_sorted_list(raw in arrivals_strategy()) {
            let mut cache = ArrivalCache::default();
            let mut expected = raw.clone();
            expected.sort_by_key(|a| a.seconds_to_station);

            cache.update(Ok(ArrivalList::new(raw)));

            prop_assert_eq!(cache.arrivals().as_slice(), expected.as_slice());
            prop_assert_eq!(cache.consecutive_empty_fetches(), 0);
        }

        #[test]
        fn empty_counter_saturates_at_threshold(raw in arrivals_strategy(), n in 1u32..15) {
            let mut cache = ArrivalCache::default();
            cache.update(Ok(ArrivalList::new(raw)));

            let mut last_exhausted = false;
            for _ in 0..n {
                last_exhausted = matches!(
                    cache.update(Ok(ArrivalList::empty())),
                    CacheOutcome::Exhausted
                );
            }

            prop_assert_eq!(
                cache.consecutive_empty_fetches(),
                n.min(DEFAULT_EMPTY_FETCH_THRESHOLD)
            );
            prop_assert_eq!(last_exhausted, n >= DEFAULT_EMPTY_FETCH_THRESHOLD);
            prop_assert_eq!(cache.arrivals().is_empty(), n >= DEFAULT_EMPTY_FETCH_THRESHOLD);
        }

        #[test]
        fn failures_never_mutate(raw in arrivals_strategy(), empties in 0u32..5, failures in 1usize..5) {
            let mut cache = ArrivalCache::default();
            cache.update(Ok(ArrivalList::new(raw)));
            for _ in 0..empties {
                cache.update(Ok(ArrivalList::empty()));
            }
            let before = cache.arrivals().clone();
            let count = cache.consecutive_empty_fetches();

            for _ in 0..failures {
                cache.update(Err(api_error()));
            }

            prop_assert_eq!(cache.arrivals(), &before);
            prop_assert_eq!(cache.consecutive_empty_fetches(), count);
        }
    }
}
