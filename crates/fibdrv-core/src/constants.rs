//! Constants shared by the engine, the device and the benchmark client.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`
/// (18,446,744,073,709,551,615), so this is where multi-limb values begin.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Largest offset the device serves unless configured otherwise.
pub const DEFAULT_MAX_OFFSET: u64 = 1000;

/// Read buffer size used by the benchmark client.
pub const DEFAULT_READ_BUFFER: usize = 500;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Output file could not be written.
    pub const ERROR_IO: i32 = 2;
    /// Storage for a value could not be obtained.
    pub const ERROR_ALLOCATION: i32 = 12;
    /// The device is held by another handle.
    pub const ERROR_BUSY: i32 = 16;
}
