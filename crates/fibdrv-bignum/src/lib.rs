//! # fibdrv-bignum
//!
//! Arbitrary-precision signed integers in sign-magnitude form, stored as
//! little-endian 64-bit limbs in a growable buffer.
//!
//! Every operation that may need more storage goes through a
//! [`LimbAllocator`] and reports failure as a [`BigIntError`] instead of
//! aborting. Multiplication is schoolbook only.
//!
//! # Example
//! ```
//! use fibdrv_bignum::BigInt;
//!
//! let a = BigInt::from(u64::MAX);
//! let b = BigInt::from(2u64);
//! let mut product = BigInt::allocate(1).unwrap();
//! BigInt::mul_into(&a, &b, &mut product).unwrap();
//! assert_eq!(product.to_string(), "36893488147419103230");
//! ```
#![warn(missing_docs)]

pub mod allocator;
pub mod arith;
pub mod decimal;
pub mod error;
pub mod limb_ops;
pub mod scan;
pub mod shift;
pub mod stats;
pub mod storage;

pub use allocator::{CappedAllocator, CountingAllocator, LimbAllocator, SystemAllocator};
pub use error::BigIntError;
pub use stats::AllocStats;
pub use storage::{BigInt, Limb, ALLOC_CHUNK_SIZE, INIT_ALLOC_SIZE, LIMB_BITS};
