//! Time-bounded swap cache for trending-keyword results.
//!
//! Readers take the lock shared and clone an `Arc`; writers replace the whole
//! slot in one swap, so a reader never observes a half-updated entry. The
//! lock is only ever held for the copy, never across an await point.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A single-entry cache whose value expires after a fixed TTL.
///
/// A zero TTL disables the cache entirely.
#[derive(Debug)]
pub struct SwapCache<T> {
    ttl: Duration,
    slot: Arc<RwLock<Option<(Instant, Arc<T>)>>>,
}

// Hand-rolled so clones share the slot without requiring `T: Clone`.
impl<T> Clone for SwapCache<T> {
    fn clone(&self) -> Self {
        Self {
            ttl: self.ttl,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> SwapCache<T> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached value if present and fresh.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        if self.ttl.is_zero() {
            return None;
        }
        let guard = self.slot.read().ok()?;
        let (stored_at, value) = guard.as_ref()?;
        if stored_at.elapsed() < self.ttl {
            Some(Arc::clone(value))
        } else {
            None
        }
    }

    /// Atomically replaces the cached value.
    pub fn store(&self, value: T) {
        self.store_shared(Arc::new(value));
    }

    /// Atomically replaces the cached value with an already-shared one.
    pub fn store_shared(&self, value: Arc<T>) {
        if self.ttl.is_zero() {
            return;
        }
        if let Ok(mut guard) = self.slot.write() {
            *guard = Some((Instant::now(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_value_is_returned() {
        let cache = SwapCache::new(Duration::from_secs(60));
        assert!(cache.get().is_none());
        cache.store(42);
        assert_eq!(*cache.get().expect("cached"), 42);
    }

    #[test]
    fn store_replaces_previous_value() {
        let cache = SwapCache::new(Duration::from_secs(60));
        cache.store(1);
        cache.store(2);
        assert_eq!(*cache.get().expect("cached"), 2);
    }

    #[test]
    fn expired_value_is_dropped() {
        let cache = SwapCache::new(Duration::from_millis(1));
        cache.store(7);
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get().is_none());
    }

    #[test]
    fn zero_ttl_disables_caching() {
        let cache = SwapCache::new(Duration::ZERO);
        cache.store(9);
        assert!(cache.get().is_none());
    }

    #[test]
    fn clones_share_the_slot() {
        let cache = SwapCache::new(Duration::from_secs(60));
        let other = cache.clone();
        cache.store(5);
        assert_eq!(*other.get().expect("shared"), 5);
    }
}
