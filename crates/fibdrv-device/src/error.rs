//! Device error type.

use fibdrv_bignum::BigIntError;
use fibdrv_core::FibError;

/// Errors reported by [`FibDevice`](crate::FibDevice) and its handles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Another handle currently holds the device.
    #[error("device is busy")]
    Busy,

    /// Computing F(position) failed.
    #[error("compute failed: {0}")]
    Compute(#[from] FibError),

    /// Rendering the result failed.
    #[error("render failed: {0}")]
    Render(#[from] BigIntError),
}
