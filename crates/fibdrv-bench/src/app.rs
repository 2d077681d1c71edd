//! Application entry point: the offset sweep.

use std::io::{self, SeekFrom, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use fibdrv_device::FibDevice;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::output::{write_to_file, Sample};

/// Outcome of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of offsets read.
    pub samples: usize,
    /// Sum of caller-side read times.
    pub total_user_ns: u64,
    /// Sum of device compute times.
    pub total_kernel_ns: u64,
    /// Mean device compute time per read.
    pub mean_compute_ns: u64,
    /// Where the data file was written.
    pub output: PathBuf,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Run the sweep, printing values to `out` unless quiet.
pub fn run_with_output<W: Write>(config: &AppConfig, out: &mut W) -> Result<RunSummary> {
    if config.offset > config.max_offset {
        warn!(
            offset = config.offset,
            max_offset = config.max_offset,
            "offsets past the device limit read the last value"
        );
    }

    let device = FibDevice::new(config.max_offset);
    let mut handle = device.open().context("failed to open Fibonacci device")?;
    let mut buf = vec![0u8; config.buf_size];
    let mut samples = Vec::new();

    for i in 0..=config.offset {
        let pos = handle.seek(SeekFrom::Start(i));
        let start = Instant::now();
        let bytes = handle
            .read(&mut buf)
            .with_context(|| format!("read failed at offset {pos}"))?;
        let user_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        let sample = Sample::new(i, bytes, user_ns, handle.last_compute_ns());
        debug!(index = i, bytes, user_ns, kernel_ns = sample.kernel_ns, "sample");
        samples.push(sample);

        if !config.quiet {
            writeln!(out, "fib({i}): {}", String::from_utf8_lossy(&buf[..bytes]))?;
        }
    }
    drop(handle);
    let device_stats = device.stats();

    write_to_file(&config.output, &samples, config.format)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    let summary = RunSummary {
        samples: samples.len(),
        total_user_ns: samples.iter().map(|s| s.user_ns).sum(),
        total_kernel_ns: samples.iter().map(|s| s.kernel_ns).sum(),
        mean_compute_ns: device_stats.mean_compute_ns(),
        output: config.output.clone(),
    };
    info!(
        samples = summary.samples,
        total_user_ns = summary.total_user_ns,
        total_kernel_ns = summary.total_kernel_ns,
        mean_compute_ns = summary.mean_compute_ns,
        bytes_read = device_stats.bytes_read,
        "sweep complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn config(offset: u64, output: PathBuf) -> AppConfig {
        AppConfig {
            offset,
            max_offset: 1000,
            buf_size: 500,
            output,
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn sweep_prints_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut printed = Vec::new();
        let summary = run_with_output(&config(10, path.clone()), &mut printed).unwrap();

        assert_eq!(summary.samples, 11);
        assert_eq!(summary.mean_compute_ns, summary.total_kernel_ns / 11);
        let printed = String::from_utf8(printed).unwrap();
        assert!(printed.starts_with("fib(0): 0\nfib(1): 1\n"));
        assert!(printed.ends_with("fib(10): 55\n"));

        let data = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[10].starts_with("10 2 "));
    }

    #[test]
    fn quiet_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(5, dir.path().join("data.txt"));
        cfg.quiet = true;
        let mut printed = Vec::new();
        run_with_output(&cfg, &mut printed).unwrap();
        assert!(printed.is_empty());
    }

    #[test]
    fn small_buffer_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(100, dir.path().join("data.txt"));
        cfg.buf_size = 4;
        let mut printed = Vec::new();
        run_with_output(&cfg, &mut printed).unwrap();
        let printed = String::from_utf8(printed).unwrap();
        assert!(printed.ends_with("fib(100): 3542\n"));
    }

    #[test]
    fn offsets_past_limit_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(12, dir.path().join("data.txt"));
        cfg.max_offset = 10;
        let mut printed = Vec::new();
        run_with_output(&cfg, &mut printed).unwrap();
        let printed = String::from_utf8(printed).unwrap();
        assert!(printed.ends_with("fib(11): 55\nfib(12): 55\n"));
    }
}
