//! Sample records and data file writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;

/// Timing for one device read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Offset that was read.
    pub index: u64,
    /// Bytes copied into the read buffer.
    pub bytes: usize,
    /// Wall time of the read as seen by the caller.
    pub user_ns: u64,
    /// Compute time reported by the device.
    pub kernel_ns: u64,
    /// `user_ns - kernel_ns`, saturating at zero.
    pub overhead_ns: u64,
}

impl Sample {
    /// Build a sample, deriving the overhead.
    #[must_use]
    pub fn new(index: u64, bytes: usize, user_ns: u64, kernel_ns: u64) -> Self {
        Self {
            index,
            bytes,
            user_ns,
            kernel_ns,
            overhead_ns: user_ns.saturating_sub(kernel_ns),
        }
    }
}

/// Format one sample as a whitespace-separated line (no newline).
#[must_use]
pub fn format_text_line(sample: &Sample) -> String {
    format!(
        "{} {} {} {} {}",
        sample.index, sample.bytes, sample.user_ns, sample.kernel_ns, sample.overhead_ns
    )
}

/// Write samples to `out` in the requested format.
pub fn write_samples<W: Write>(
    out: &mut W,
    samples: &[Sample],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for sample in samples {
                writeln!(out, "{}", format_text_line(sample))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, samples)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and write the samples to it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, samples: &[Sample], format: OutputFormat) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_samples(&mut file, samples, format)?;
    file.flush()
}
