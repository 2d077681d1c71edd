//! # fibdrv-device
//!
//! A character-device style front end for the Fibonacci engine. The file
//! position selects the index; a read computes F(position) and copies its
//! decimal text into the caller's buffer.
//!
//! ```
//! use std::io::SeekFrom;
//! use fibdrv_device::FibDevice;
//!
//! let device = FibDevice::default();
//! let mut handle = device.open().unwrap();
//! handle.seek(SeekFrom::Start(10));
//! let mut buf = [0u8; 16];
//! let n = handle.read(&mut buf).unwrap();
//! assert_eq!(&buf[..n], b"55");
//! ```

pub mod device;
pub mod error;
pub mod stats;

pub use device::{DeviceHandle, FibDevice};
pub use error::DeviceError;
pub use stats::DeviceStats;
