//! Debounce machinery for the plan-availability batch.
//!
//! A new (date, location) pair does not fire its batch immediately: it
//! waits a quiet period, and a newer pair supersedes it by bumping the
//! generation. Superseded batches stop issuing checks and their results
//! are dropped, so the board always reflects the latest trigger rather
//! than arrival order.

use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;

/// Quiet period before an availability batch fires.
pub const QUIET_PERIOD_MS: u32 = 500;

/// Monotonic counter of batch triggers. Clones share the counter, so the
/// view holds one handle and every spawned batch another.
#[derive(Clone, Default)]
pub struct Generation {
    current: Rc<Cell<u64>>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier token.
    pub fn bump(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    /// Whether `token` is still the live generation.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

/// Sleep out the quiet period before a batch fires.
pub async fn quiet_period() {
    TimeoutFuture::new(QUIET_PERIOD_MS).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_supersedes_older_tokens() {
        let generation = Generation::new();
        let first = generation.bump();
        assert!(generation.is_current(first));

        let second = generation.bump();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = Generation::new();
        let watcher = generation.clone();

        let token = generation.bump();
        assert!(watcher.is_current(token));

        watcher.bump();
        assert!(!generation.is_current(token));
    }
}
