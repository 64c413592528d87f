//! Unit test harness
//!
//! Compiles the modules under `tests/unit/` into a single test binary.

mod common;
mod unit;
