//! Session-scoped slot-availability cache with request coalescing.
//!
//! Two tables: settled verdicts (immutable once written, no TTL) and
//! in-flight shared futures. Concurrent checks for the same key await the
//! same shared future, so at most one request per key is ever on the wire.
//! Transport failures resolve available without being cached, so the next
//! lookup retries; the backend re-validates at submission either way.

use chrono::{DateTime, Utc};
use contracts::usecases::u101_slot_booking::AvailabilityQuery;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::shared::api_utils::ApiError;

/// Settled verdict for one slot key.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityEntry {
    pub available: bool,
    /// Kept so an expiry policy could be added without changing the table.
    pub checked_at: DateTime<Utc>,
}

/// How the cache reaches the backend. Injected so tests can count and gate
/// the underlying requests.
pub type LookupFn =
    Rc<dyn Fn(AvailabilityQuery) -> LocalBoxFuture<'static, Result<bool, ApiError>>>;

/// `None` marks a transport failure: fail open, cache nothing.
type InFlight = Shared<LocalBoxFuture<'static, Option<bool>>>;

#[derive(Clone)]
pub struct AvailabilityCache {
    lookup: LookupFn,
    settled: Rc<RefCell<HashMap<AvailabilityQuery, AvailabilityEntry>>>,
    in_flight: Rc<RefCell<HashMap<AvailabilityQuery, InFlight>>>,
}

impl AvailabilityCache {
    pub fn new(lookup: LookupFn) -> Self {
        Self {
            lookup,
            settled: Rc::new(RefCell::new(HashMap::new())),
            in_flight: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Is the slot available? Settled keys answer without a request;
    /// concurrent misses for one key share a single request.
    pub async fn check(&self, key: AvailabilityQuery) -> bool {
        if let Some(entry) = self.settled.borrow().get(&key) {
            return entry.available;
        }

        let shared = {
            let mut in_flight = self.in_flight.borrow_mut();
            match in_flight.get(&key) {
                Some(existing) => existing.clone(),
                None => {
                    let lookup = Rc::clone(&self.lookup);
                    let settled = Rc::clone(&self.settled);
                    let table = Rc::clone(&self.in_flight);
                    let future: LocalBoxFuture<'static, Option<bool>> = async move {
                        let outcome = lookup(key).await;
                        table.borrow_mut().remove(&key);
                        match outcome {
                            Ok(available) => {
                                settled.borrow_mut().insert(
                                    key,
                                    AvailabilityEntry {
                                        available,
                                        checked_at: Utc::now(),
                                    },
                                );
                                Some(available)
                            }
                            Err(_) => None,
                        }
                    }
                    .boxed_local();
                    let shared = future.shared();
                    in_flight.insert(key, shared.clone());
                    shared
                }
            }
        };

        shared.await.unwrap_or(true)
    }

    /// Settled verdict without touching the network.
    pub fn peek(&self, key: &AvailabilityQuery) -> Option<AvailabilityEntry> {
        self.settled.borrow().get(key).copied()
    }

    /// Forget everything, settled and in flight. Called on logout.
    pub fn clear(&self) {
        self.settled.borrow_mut().clear();
        self.in_flight.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_location::aggregate::LocationId;
    use contracts::domain::a002_plan::aggregate::PlanId;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;
    use uuid::Uuid;

    fn query(n: u128) -> AvailabilityQuery {
        AvailabilityQuery {
            location_id: LocationId::new(Uuid::from_u128(n)),
            plan_id: PlanId::new(Uuid::from_u128(n + 1)),
            date: chrono::NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
        }
    }

    fn counting_lookup(
        calls: Rc<Cell<usize>>,
        verdict: Result<bool, ApiError>,
    ) -> LookupFn {
        Rc::new(move |_key| {
            calls.set(calls.get() + 1);
            let verdict = verdict.clone();
            async move { verdict }.boxed_local()
        })
    }

    #[test]
    fn concurrent_checks_for_one_key_share_a_single_request() {
        let calls = Rc::new(Cell::new(0usize));
        let (gate_tx, gate_rx) = oneshot::channel::<bool>();
        let gate = Rc::new(RefCell::new(Some(gate_rx)));

        let lookup: LookupFn = {
            let calls = Rc::clone(&calls);
            Rc::new(move |_key| {
                calls.set(calls.get() + 1);
                let gate_rx = gate.borrow_mut().take().expect("only one request expected");
                async move { Ok(gate_rx.await.unwrap_or(false)) }.boxed_local()
            })
        };
        let cache = AvailabilityCache::new(lookup);
        let key = query(1);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let first = {
            let cache = cache.clone();
            spawner
                .spawn_local_with_handle(async move { cache.check(key).await })
                .unwrap()
        };
        let second = {
            let cache = cache.clone();
            spawner
                .spawn_local_with_handle(async move { cache.check(key).await })
                .unwrap()
        };

        // Both callers are parked on the same shared future.
        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);

        gate_tx.send(true).unwrap();
        let (a, b) = pool.run_until(async move { (first.await, second.await) });
        assert!(a);
        assert!(b);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.peek(&key).map(|e| e.available), Some(true));
    }

    #[test]
    fn distinct_keys_fetch_independently() {
        let calls = Rc::new(Cell::new(0usize));
        let cache = AvailabilityCache::new(counting_lookup(Rc::clone(&calls), Ok(true)));

        let mut pool = LocalPool::new();
        assert!(pool.run_until(cache.check(query(1))));
        assert!(pool.run_until(cache.check(query(3))));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn settled_keys_answer_without_a_request_until_cleared() {
        let calls = Rc::new(Cell::new(0usize));
        let cache = AvailabilityCache::new(counting_lookup(Rc::clone(&calls), Ok(false)));
        let key = query(1);

        let mut pool = LocalPool::new();
        assert!(!pool.run_until(cache.check(key)));
        assert!(!pool.run_until(cache.check(key)));
        assert_eq!(calls.get(), 1);

        cache.clear();
        assert!(cache.peek(&key).is_none());
        assert!(!pool.run_until(cache.check(key)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn transport_failure_fails_open_and_is_retried() {
        let calls = Rc::new(Cell::new(0usize));
        let lookup: LookupFn = {
            let calls = Rc::clone(&calls);
            Rc::new(move |_key| {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        Err(ApiError::Network("connection reset".to_string()))
                    } else {
                        Ok(false)
                    }
                }
                .boxed_local()
            })
        };
        let cache = AvailabilityCache::new(lookup);
        let key = query(1);

        let mut pool = LocalPool::new();
        // Failure reads as available but is not written to the cache.
        assert!(pool.run_until(cache.check(key)));
        assert!(cache.peek(&key).is_none());

        // The next lookup retries and settles the real verdict.
        assert!(!pool.run_until(cache.check(key)));
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.peek(&key).map(|e| e.available), Some(false));
    }
}
