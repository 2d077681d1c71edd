//! Calculator trait and error type.

use fibdrv_bignum::{BigInt, BigIntError};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// An arithmetic step failed, typically for lack of storage.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] BigIntError),
}

/// A Fibonacci number generator.
pub trait Calculator: Send + Sync {
    /// Calculate F(n). Pure in `n`: no state survives between calls.
    fn calculate(&self, n: u64) -> Result<BigInt, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::from(BigIntError::AllocationFailure { requested: 4 });
        assert_eq!(
            err.to_string(),
            "arithmetic error: failed to allocate storage for 4 limbs"
        );
    }
}
