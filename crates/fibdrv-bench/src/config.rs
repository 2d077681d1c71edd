//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fibdrv_core::{DEFAULT_MAX_OFFSET, DEFAULT_READ_BUFFER};

/// Data file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `index bytes user_ns kernel_ns overhead_ns` line per offset.
    Text,
    /// A JSON array of samples.
    Json,
}

/// fibdrv-bench: reads every Fibonacci offset from the device and records
/// per-read timings.
#[derive(Parser, Debug)]
#[command(name = "fibdrv-bench", version, about)]
pub struct AppConfig {
    /// Highest offset to read.
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_OFFSET, env = "FIBDRV_OFFSET")]
    pub offset: u64,

    /// Device offset limit; seeks past it are clamped.
    #[arg(long, default_value_t = DEFAULT_MAX_OFFSET, env = "FIBDRV_MAX_OFFSET")]
    pub max_offset: u64,

    /// Read buffer size in bytes.
    #[arg(long, default_value_t = DEFAULT_READ_BUFFER)]
    pub buf_size: usize,

    /// Data file path.
    #[arg(short, long, default_value = "data.txt")]
    pub output: PathBuf,

    /// Data file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print values.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
