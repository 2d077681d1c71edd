//! Integration test harness for the fibdrv-rs workspace.
//!
//! The tests live in `tests/`; this crate has no items of its own.
