//! fibdrv-bench library: sweeps the Fibonacci device and records timings.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
