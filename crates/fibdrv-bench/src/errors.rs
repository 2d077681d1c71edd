//! Error handling and exit codes.

use std::io;

use fibdrv_bignum::BigIntError;
use fibdrv_core::exit_codes;
use fibdrv_core::FibError;
use fibdrv_device::DeviceError;

/// Map an application error to a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(device) = cause.downcast_ref::<DeviceError>() {
            return match device {
                DeviceError::Busy => exit_codes::ERROR_BUSY,
                DeviceError::Compute(FibError::Arithmetic(e)) | DeviceError::Render(e) => {
                    arithmetic_code(e)
                }
            };
        }
        if let Some(FibError::Arithmetic(e)) = cause.downcast_ref::<FibError>() {
            return arithmetic_code(e);
        }
        if cause.is::<io::Error>() {
            return exit_codes::ERROR_IO;
        }
    }
    exit_codes::ERROR_GENERIC
}

fn arithmetic_code(err: &BigIntError) -> i32 {
    match err {
        BigIntError::AllocationFailure { .. } => exit_codes::ERROR_ALLOCATION,
        _ => exit_codes::ERROR_GENERIC,
    }
}
