//! # Identifier Allocator
//!
//! Hands out strictly increasing `u64` identifiers. The counter is seeded once at startup
//! from the largest id the store holds, so allocation survives restarts as long as the
//! persisted maximum is accurate. Gaps left by deletions are not reclaimed.

use crate::framework::entity::ActorEntity;
use crate::framework::store::{RecordStore, StoreError};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Owned, thread-safe identifier source.
///
/// `next_id` is a single atomic increment, so concurrent callers never observe the same
/// value. The allocator is the only issuer: records written through any other path are not
/// seen until the next [`IdAllocator::recover`].
#[derive(Debug, Default)]
pub struct IdAllocator {
    last_issued: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first issued id is `last_issued + 1`.
    pub fn starting_after(last_issued: u64) -> Self {
        Self {
            last_issued: AtomicU64::new(last_issued),
        }
    }

    /// Seeds an allocator from the maximum id currently persisted in `store` (0 if empty).
    pub async fn recover<T: ActorEntity>(store: &dyn RecordStore<T>) -> Result<Self, StoreError> {
        let last_issued: u64 = store.max_id().await?.map(Into::into).unwrap_or(0);
        info!(last_issued, "Allocator recovered");
        Ok(Self::starting_after(last_issued))
    }

    /// Issues the next identifier.
    pub fn next_id(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued identifier (or the recovered seed if none was issued yet).
    pub fn last_issued(&self) -> u64 {
        self.last_issued.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_fresh_allocator_starts_at_one() {
        let alloc = IdAllocator::default();
        assert_eq!(alloc.next_id(), 1);
        assert_eq!(alloc.next_id(), 2);
        assert_eq!(alloc.last_issued(), 2);
    }

    #[test]
    fn test_seeded_allocator_continues_after_seed() {
        let alloc = IdAllocator::starting_after(41);
        assert_eq!(alloc.last_issued(), 41);
        assert_eq!(alloc.next_id(), 42);
    }

    #[test]
    fn test_concurrent_allocation_is_unique() {
        let alloc = Arc::new(IdAllocator::default());

        let mut handles = Vec::new();
        for _ in 0..4 {
            let alloc = Arc::clone(&alloc);
            handles.push(std::thread::spawn(move || {
                (0..250).map(|_| alloc.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut all_ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all_ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(all_ids.len(), 1000);
        assert_eq!(all_ids.iter().min(), Some(&1));
        assert_eq!(all_ids.iter().max(), Some(&1000));
    }
}
