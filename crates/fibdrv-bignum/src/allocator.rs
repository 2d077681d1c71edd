//! Limb storage allocators.
//!
//! A [`LimbAllocator`] owns the policy for obtaining limb buffers. `grow`
//! must either succeed completely or leave the buffer untouched, so callers
//! can update their bookkeeping only after it returns `Ok`.

use tracing::warn;

use crate::error::BigIntError;
use crate::stats::{AllocStats, AtomicAllocStats};
use crate::storage::Limb;

/// Trait for limb buffer allocators used by [`BigInt`](crate::BigInt).
pub trait LimbAllocator: Send + Sync {
    /// Enlarge `limbs` to exactly `new_capacity` zeroed-on-extension limbs.
    ///
    /// On error `limbs` is unchanged.
    fn grow(&self, limbs: &mut Vec<Limb>, new_capacity: usize) -> Result<(), BigIntError>;

    /// Take back a buffer that is no longer needed.
    fn release(&self, limbs: Vec<Limb>) {
        drop(limbs);
    }
}

/// Allocator backed by the global heap with fallible reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

/// Shared instance used by [`BigInt::allocate`](crate::BigInt::allocate).
pub static SYSTEM: SystemAllocator = SystemAllocator;

impl LimbAllocator for SystemAllocator {
    fn grow(&self, limbs: &mut Vec<Limb>, new_capacity: usize) -> Result<(), BigIntError> {
        let additional = new_capacity.saturating_sub(limbs.len());
        if limbs.try_reserve_exact(additional).is_err() {
            warn!(requested = new_capacity, "limb reservation failed");
            return Err(BigIntError::AllocationFailure {
                requested: new_capacity,
            });
        }
        limbs.resize(new_capacity, 0);
        Ok(())
    }
}

/// Allocator that refuses any buffer larger than a fixed limb budget.
///
/// Useful for bounding memory and for exercising failure paths.
#[derive(Debug, Clone, Copy)]
pub struct CappedAllocator {
    max_limbs: usize,
}

impl CappedAllocator {
    /// Create an allocator that serves at most `max_limbs` limbs per buffer.
    #[must_use]
    pub const fn new(max_limbs: usize) -> Self {
        Self { max_limbs }
    }
}

impl LimbAllocator for CappedAllocator {
    fn grow(&self, limbs: &mut Vec<Limb>, new_capacity: usize) -> Result<(), BigIntError> {
        if new_capacity > self.max_limbs {
            warn!(
                requested = new_capacity,
                max = self.max_limbs,
                "limb budget exceeded"
            );
            return Err(BigIntError::AllocationFailure {
                requested: new_capacity,
            });
        }
        SystemAllocator.grow(limbs, new_capacity)
    }
}

/// Allocator wrapper that records usage statistics.
pub struct CountingAllocator<A> {
    inner: A,
    stats: AtomicAllocStats,
}

impl<A: LimbAllocator> CountingAllocator<A> {
    /// Wrap `inner`, starting with zeroed counters.
    pub const fn new(inner: A) -> Self {
        Self {
            inner,
            stats: AtomicAllocStats::new(),
        }
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn stats(&self) -> AllocStats {
        self.stats.snapshot()
    }
}

impl<A: LimbAllocator> LimbAllocator for CountingAllocator<A> {
    fn grow(&self, limbs: &mut Vec<Limb>, new_capacity: usize) -> Result<(), BigIntError> {
        let fresh = limbs.is_empty();
        match self.inner.grow(limbs, new_capacity) {
            Ok(()) => {
                if fresh {
                    self.stats.record_allocation();
                } else {
                    self.stats.record_grow();
                }
                Ok(())
            }
            Err(e) => {
                self.stats.record_failure();
                Err(e)
            }
        }
    }

    fn release(&self, limbs: Vec<Limb>) {
        if !limbs.is_empty() {
            self.stats.record_release();
        }
        self.inner.release(limbs);
    }
}
