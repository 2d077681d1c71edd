//! Error type for big integer operations.

/// Errors reported by [`BigInt`](crate::BigInt) operations.
///
/// All variants are recoverable: the value an operation was applied to is
/// left in its previous valid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    /// Backing storage for the requested number of limbs could not be obtained.
    #[error("failed to allocate storage for {requested} limbs")]
    AllocationFailure {
        /// Capacity (in limbs) that was requested.
        requested: usize,
    },

    /// The value's storage has already been released.
    #[error("big integer storage has been released")]
    InvalidHandle,

    /// A magnitude-only subtraction was asked to produce a negative result.
    #[error("magnitude subtraction requires |a| >= |b|")]
    PreconditionViolation,

    /// Shift amounts must be below the limb width.
    #[error("unsupported shift amount {0} (must be < 64)")]
    UnsupportedShift(u32),
}
