//! `BigInt` value type and its storage lifecycle.
//!
//! The limb buffer is fully initialised: `limbs.len()` is the capacity and
//! only the first `size` limbs are significant. Limbs past `size` may hold
//! stale data after a shrink and are zeroed again when exposed by a grow.

use std::fmt;

use crate::allocator::{LimbAllocator, SYSTEM};
use crate::error::BigIntError;

/// One 64-bit word of a multi-word integer, least significant first.
pub type Limb = u64;

/// Bits per limb.
pub const LIMB_BITS: usize = 64;

/// Minimum capacity of a freshly allocated value, in limbs.
pub const INIT_ALLOC_SIZE: usize = 4;

/// Capacity growth granularity, in limbs.
pub const ALLOC_CHUNK_SIZE: usize = 4;

/// Arbitrary-precision signed integer in sign-magnitude form.
///
/// A value has exactly one owner. Copies are explicit ([`BigInt::try_clone`],
/// [`BigInt::copy_from`]); [`BigInt::swap`] exchanges two values in O(1).
/// Dropping a value hands its buffer back to the allocator.
pub struct BigInt {
    limbs: Vec<Limb>,
    size: usize,
    negative: bool,
    alloc: &'static dyn LimbAllocator,
}

impl BigInt {
    /// Allocate a `+0` with room for at least `initial_size` limbs, using the
    /// system allocator.
    ///
    /// # Example
    /// ```
    /// use fibdrv_bignum::BigInt;
    ///
    /// let zero = BigInt::allocate(10).unwrap();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.size(), 1);
    /// assert_eq!(zero.capacity(), 10);
    /// ```
    pub fn allocate(initial_size: usize) -> Result<Self, BigIntError> {
        Self::allocate_in(initial_size, &SYSTEM)
    }

    /// Allocate a `+0` with room for at least `initial_size` limbs from `alloc`.
    ///
    /// Capacity is never below [`INIT_ALLOC_SIZE`].
    pub fn allocate_in(
        initial_size: usize,
        alloc: &'static dyn LimbAllocator,
    ) -> Result<Self, BigIntError> {
        let mut limbs = Vec::new();
        alloc.grow(&mut limbs, initial_size.max(INIT_ALLOC_SIZE))?;
        Ok(Self {
            limbs,
            size: 1,
            negative: false,
            alloc,
        })
    }

    /// Build a value from little-endian limbs and a sign. Leading zero limbs
    /// are trimmed and a zero magnitude is always non-negative.
    pub fn from_limbs(limbs: &[Limb], negative: bool) -> Result<Self, BigIntError> {
        let mut value = Self::allocate(limbs.len())?;
        if !limbs.is_empty() {
            value.resize(limbs.len())?;
            value.limbs[..limbs.len()].copy_from_slice(limbs);
        }
        value.negative = negative;
        value.normalize();
        Ok(value)
    }

    /// Change the number of significant limbs.
    ///
    /// Growing zero-fills the new limbs and, past the current capacity,
    /// reallocates to the next multiple of [`ALLOC_CHUNK_SIZE`]. Shrinking
    /// drops the high limbs. Resizing to 0 releases the storage. On
    /// allocation failure the value is left unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<(), BigIntError> {
        self.ensure_live()?;
        if new_size == self.size {
            return Ok(());
        }
        if new_size == 0 {
            return self.release();
        }
        if new_size > self.capacity() {
            let new_capacity = new_size.div_ceil(ALLOC_CHUNK_SIZE) * ALLOC_CHUNK_SIZE;
            self.alloc.grow(&mut self.limbs, new_capacity)?;
        }
        if new_size > self.size {
            self.limbs[self.size..new_size].fill(0);
        }
        self.size = new_size;
        Ok(())
    }

    /// Overwrite `self` with the value of `src`.
    pub fn copy_from(&mut self, src: &BigInt) -> Result<(), BigIntError> {
        src.ensure_live()?;
        self.resize(src.size)?;
        self.limbs[..src.size].copy_from_slice(src.limbs());
        self.negative = src.negative;
        Ok(())
    }

    /// Explicit deep copy sharing this value's allocator.
    pub fn try_clone(&self) -> Result<Self, BigIntError> {
        self.ensure_live()?;
        let mut out = Self::allocate_in(self.size, self.alloc)?;
        out.copy_from(self)?;
        Ok(out)
    }

    /// Exchange buffers, sizes, signs and allocators with `other`.
    pub fn swap(&mut self, other: &mut BigInt) {
        std::mem::swap(self, other);
    }

    /// Free the backing storage. Releasing twice reports
    /// [`BigIntError::InvalidHandle`].
    pub fn release(&mut self) -> Result<(), BigIntError> {
        self.ensure_live()?;
        let limbs = std::mem::take(&mut self.limbs);
        self.alloc.release(limbs);
        self.size = 0;
        self.negative = false;
        Ok(())
    }

    /// Set the value to canonical `+0`, keeping the buffer.
    pub fn set_zero(&mut self) -> Result<(), BigIntError> {
        self.set_u64(0)
    }

    /// Set the value to a non-negative `u64`, keeping the buffer.
    pub fn set_u64(&mut self, value: u64) -> Result<(), BigIntError> {
        self.resize(1)?;
        self.limbs[0] = value;
        self.negative = false;
        Ok(())
    }

    /// The value as a `u64`, if it is non-negative and fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_released() || self.negative {
            return None;
        }
        let limbs = self.limbs();
        if limbs[1..].iter().any(|&l| l != 0) {
            return None;
        }
        Some(limbs[0])
    }

    /// Flip the sign. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Number of significant limbs (0 once released).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated limbs.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// Significant limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs[..self.size]
    }

    /// Whether the value is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the value is zero. Released values are not zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.is_released() && self.limbs().iter().all(|&l| l == 0)
    }

    /// Whether the storage has been released.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.size == 0
    }

    /// Allocator serving this value.
    #[must_use]
    pub fn allocator(&self) -> &'static dyn LimbAllocator {
        self.alloc
    }

    pub(crate) fn ensure_live(&self) -> Result<(), BigIntError> {
        if self.is_released() {
            Err(BigIntError::InvalidHandle)
        } else {
            Ok(())
        }
    }

    /// Limb `i`, reading zero past the significant part.
    #[inline]
    pub(crate) fn limb(&self, i: usize) -> Limb {
        if i < self.size {
            self.limbs[i]
        } else {
            0
        }
    }

    #[inline]
    pub(crate) fn limbs_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs[..self.size]
    }

    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    /// Trim leading zero limbs (keeping one) and clear the sign of zero.
    pub(crate) fn normalize(&mut self) {
        let mut n = self.size;
        while n > 1 && self.limbs[n - 1] == 0 {
            n -= 1;
        }
        self.size = n;
        if n == 1 && self.limbs[0] == 0 {
            self.negative = false;
        }
    }
}

impl Drop for BigInt {
    fn drop(&mut self) {
        let limbs = std::mem::take(&mut self.limbs);
        self.alloc.release(limbs);
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut limbs = vec![0; INIT_ALLOC_SIZE];
        limbs[0] = value;
        Self {
            limbs,
            size: 1,
            negative: false,
            alloc: &SYSTEM,
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let mut out = Self::from(value.unsigned_abs());
        out.negative = value < 0;
        out
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::from(0u64)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("limbs", &self.limbs())
            .finish()
    }
}
