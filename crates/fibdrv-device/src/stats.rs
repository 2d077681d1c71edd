//! Device usage counters.

/// Cumulative counters for one [`FibDevice`](crate::FibDevice).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Completed reads.
    pub reads: u64,
    /// Completed timing writes.
    pub writes: u64,
    /// Bytes copied out by reads.
    pub bytes_read: u64,
    /// Nanoseconds spent computing, across reads and writes.
    pub compute_ns: u64,
}

impl DeviceStats {
    /// Mean compute time per operation, or 0 before the first one.
    #[must_use]
    pub fn mean_compute_ns(&self) -> u64 {
        let ops = self.reads + self.writes;
        if ops == 0 {
            0
        } else {
            self.compute_ns / ops
        }
    }

    pub(crate) fn record_read(&mut self, bytes: usize, ns: u64) {
        self.reads += 1;
        self.bytes_read += bytes as u64;
        self.compute_ns = self.compute_ns.saturating_add(ns);
    }

    pub(crate) fn record_write(&mut self, ns: u64) {
        self.writes += 1;
        self.compute_ns = self.compute_ns.saturating_add(ns);
    }
}
