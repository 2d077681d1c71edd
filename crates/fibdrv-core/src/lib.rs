//! # fibdrv-core
//!
//! Fast-doubling Fibonacci engine built on `fibdrv-bignum`.
//!
//! The two boundary functions are [`fibonacci`], which computes F(n) as an
//! owned [`BigInt`], and [`render`], which turns a value into the decimal
//! text handed to the I/O layer.

pub mod calculator;
pub mod constants;
pub mod fastdoubling;

// Re-exports
pub use calculator::{Calculator, FibError};
pub use constants::{exit_codes, DEFAULT_MAX_OFFSET, DEFAULT_READ_BUFFER, FIB_TABLE, MAX_FIB_U64};
pub use fastdoubling::FastDoubling;
pub use fibdrv_bignum::BigInt;

/// Compute F(n) using the fast doubling algorithm.
///
/// # Example
/// ```
/// assert_eq!(fibdrv_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fibdrv_core::fibonacci(0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<BigInt, FibError> {
    FastDoubling::new().calculate(n)
}

/// Render a value as decimal text.
///
/// # Example
/// ```
/// let f93 = fibdrv_core::fibonacci(93).unwrap();
/// assert_eq!(fibdrv_core::render(&f93).unwrap(), "12200160415121876738");
/// ```
pub fn render(value: &BigInt) -> Result<String, FibError> {
    Ok(value.to_decimal_string()?)
}
