//! Fibonacci device and its open handles.
//!
//! Only one handle may be open at a time. The position is the Fibonacci
//! index and is clamped to `[0, max_offset]`.

use std::io::SeekFrom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use fibdrv_bignum::BigInt;
use fibdrv_core::{Calculator, FastDoubling, DEFAULT_MAX_OFFSET};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::DeviceError;
use crate::stats::DeviceStats;

/// The device: a calculator, an offset limit and an exclusive-open flag.
pub struct FibDevice {
    calculator: Box<dyn Calculator>,
    max_offset: u64,
    in_use: AtomicBool,
    stats: Mutex<DeviceStats>,
}

impl FibDevice {
    /// Create a device backed by [`FastDoubling`].
    #[must_use]
    pub fn new(max_offset: u64) -> Self {
        Self::with_calculator(max_offset, Box::new(FastDoubling::new()))
    }

    /// Create a device backed by an arbitrary calculator.
    #[must_use]
    pub fn with_calculator(max_offset: u64, calculator: Box<dyn Calculator>) -> Self {
        Self {
            calculator,
            max_offset,
            in_use: AtomicBool::new(false),
            stats: Mutex::new(DeviceStats::default()),
        }
    }

    /// Largest reachable index.
    #[must_use]
    pub fn max_offset(&self) -> u64 {
        self.max_offset
    }

    /// Open the device. Fails with [`DeviceError::Busy`] while another
    /// handle is alive.
    pub fn open(&self) -> Result<DeviceHandle<'_>, DeviceError> {
        if self
            .in_use
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            debug!("open refused: device busy");
            return Err(DeviceError::Busy);
        }
        debug!(calculator = self.calculator.name(), "device opened");
        Ok(DeviceHandle {
            device: self,
            pos: 0,
            last_compute_ns: 0,
        })
    }

    /// Snapshot of the usage counters.
    #[must_use]
    pub fn stats(&self) -> DeviceStats {
        *self.stats.lock()
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OFFSET)
    }
}

/// An open handle. Dropping it releases the device.
pub struct DeviceHandle<'a> {
    device: &'a FibDevice,
    pos: u64,
    last_compute_ns: u64,
}

impl DeviceHandle<'_> {
    /// Move the position and return the new one, clamped to the device range.
    pub fn seek(&mut self, pos: SeekFrom) -> u64 {
        let max = i128::from(self.device.max_offset);
        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(delta) => i128::from(self.pos) + i128::from(delta),
            SeekFrom::End(delta) => max + i128::from(delta),
        };
        self.pos = u64::try_from(target.clamp(0, max)).unwrap_or(0);
        self.pos
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Compute F(position) and copy as much of its decimal text as fits in
    /// `buf`. Returns the number of bytes copied; the position is unchanged.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let (value, ns) = self.compute()?;
        let copied = value.write_decimal(buf)?;
        self.device.stats.lock().record_read(copied, ns);
        debug!(offset = self.pos, bytes = copied, compute_ns = ns, "read");
        Ok(copied)
    }

    /// Compute F(position) without copying and return the compute time in
    /// nanoseconds. The input is ignored.
    pub fn write(&mut self, _buf: &[u8]) -> Result<u64, DeviceError> {
        let (_, ns) = self.compute()?;
        self.device.stats.lock().record_write(ns);
        debug!(offset = self.pos, compute_ns = ns, "timing write");
        Ok(ns)
    }

    /// Compute time of the most recent read or write.
    #[must_use]
    pub fn last_compute_ns(&self) -> u64 {
        self.last_compute_ns
    }

    fn compute(&mut self) -> Result<(BigInt, u64), DeviceError> {
        let start = Instant::now();
        let value = self.device.calculator.calculate(self.pos)?;
        let ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.last_compute_ns = ns;
        Ok((value, ns))
    }
}

impl Drop for DeviceHandle<'_> {
    fn drop(&mut self) {
        self.device.in_use.store(false, Ordering::Release);
        debug!("device released");
    }
}
