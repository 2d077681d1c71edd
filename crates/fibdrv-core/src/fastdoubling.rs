//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * [2*F(k+1) - F(k)]
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates from MSB to LSB of n. Results land in scratch registers that are
//! rotated with `swap`, so no value is copied inside the loop.

use fibdrv_bignum::allocator::SYSTEM;
use fibdrv_bignum::{BigInt, BigIntError, LimbAllocator};
use tracing::{debug, trace};

use crate::calculator::{Calculator, FibError};

/// Working registers for one Fast Doubling computation.
///
/// Created per call and dropped when the call returns.
pub struct CalculationState {
    /// Current F(k).
    pub fk: BigInt,
    /// Current F(k+1).
    pub fk1: BigInt,
    /// Temporary register 1.
    pub t1: BigInt,
    /// Temporary register 2.
    pub t2: BigInt,
}

impl CalculationState {
    /// Create a state initialized for F(0)=0, F(1)=1.
    pub fn new_in(alloc: &'static dyn LimbAllocator) -> Result<Self, BigIntError> {
        let fk = BigInt::allocate_in(1, alloc)?;
        let mut fk1 = BigInt::allocate_in(1, alloc)?;
        fk1.set_u64(1)?;
        Ok(Self {
            fk,
            fk1,
            t1: BigInt::allocate_in(1, alloc)?,
            t2: BigInt::allocate_in(1, alloc)?,
        })
    }

    /// One doubling step: (F(k), F(k+1)) -> (F(2k), F(2k+1)).
    fn double(&mut self) -> Result<(), BigIntError> {
        // t1 = 2*F(k+1) - F(k)
        self.fk1.shl_into(1, &mut self.t1)?;
        self.t1.sub_assign(&self.fk)?;
        // t2 = F(k) * t1 = F(2k)
        BigInt::mul_into(&self.fk, &self.t1, &mut self.t2)?;
        // t1 = F(k)^2
        BigInt::mul_into(&self.fk, &self.fk, &mut self.t1)?;
        self.fk.swap(&mut self.t2);
        // t2 = F(k+1)^2
        BigInt::mul_into(&self.fk1, &self.fk1, &mut self.t2)?;
        // F(2k+1) = F(k)^2 + F(k+1)^2
        BigInt::add_into(&self.t1, &self.t2, &mut self.fk1)
    }

    /// Advance by one index: (F(m), F(m+1)) -> (F(m+1), F(m+2)).
    fn step(&mut self) -> Result<(), BigIntError> {
        self.fk.swap(&mut self.fk1);
        self.fk1.add_assign(&self.fk)
    }
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibdrv_core::calculator::Calculator;
/// use fibdrv_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// let result = calc.calculate(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling {
    alloc: &'static dyn LimbAllocator,
}

impl FastDoubling {
    /// Create a calculator backed by the system allocator.
    #[must_use]
    pub fn new() -> Self {
        Self { alloc: &SYSTEM }
    }

    /// Create a calculator whose result and scratch values come from `alloc`.
    #[must_use]
    pub fn with_allocator(alloc: &'static dyn LimbAllocator) -> Self {
        Self { alloc }
    }

    /// Execute the doubling loop for `n >= 2`.
    fn execute_doubling_loop(&self, n: u64) -> Result<BigInt, BigIntError> {
        let num_bits = 64 - n.leading_zeros();
        let mut state = CalculationState::new_in(self.alloc)?;

        for i in (0..num_bits).rev() {
            state.double()?;
            if (n >> i) & 1 == 1 {
                state.step()?;
            }
            trace!(bit = i, limbs = state.fk1.size(), "doubling step");
        }

        let CalculationState { fk, .. } = state;
        Ok(fk)
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn calculate(&self, n: u64) -> Result<BigInt, FibError> {
        if n < 2 {
            let mut value = BigInt::allocate_in(1, self.alloc)?;
            value.set_u64(n)?;
            return Ok(value);
        }
        let result = self.execute_doubling_loop(n)?;
        debug!(n, bits = result.bit_length(), "fibonacci computed");
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
