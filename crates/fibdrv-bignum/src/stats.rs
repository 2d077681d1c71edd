//! Atomic allocation statistics for lock-free usage tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of allocator activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Buffers obtained from an empty state (fresh allocations).
    pub allocations: u64,
    /// Buffers enlarged in place or moved to a larger block.
    pub grows: u64,
    /// Requests the underlying allocator refused.
    pub failures: u64,
    /// Buffers handed back.
    pub releases: u64,
}

impl AllocStats {
    /// Buffers currently outstanding (allocated and not yet released).
    #[must_use]
    pub fn live(&self) -> u64 {
        self.allocations.saturating_sub(self.releases)
    }
}

/// Atomic counters behind [`AllocStats`].
pub struct AtomicAllocStats {
    allocations: AtomicU64,
    grows: AtomicU64,
    failures: AtomicU64,
    releases: AtomicU64,
}

impl AtomicAllocStats {
    /// Create zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allocations: AtomicU64::new(0),
            grows: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            releases: AtomicU64::new(0),
        }
    }

    /// Take a snapshot of current counters.
    pub fn snapshot(&self) -> AllocStats {
        AllocStats {
            allocations: self.allocations.load(Ordering::Relaxed),
            grows: self.grows.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            releases: self.releases.load(Ordering::Relaxed),
        }
    }

    /// Increment the allocation counter.
    pub fn record_allocation(&self) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the grow counter.
    pub fn record_grow(&self) {
        self.grows.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the failure counter.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the release counter.
    pub fn record_release(&self) {
        self.releases.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for AtomicAllocStats {
    fn default() -> Self {
        Self::new()
    }
}
