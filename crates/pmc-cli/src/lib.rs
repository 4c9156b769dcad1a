//! `pmc-cli` - Command-line driver for the parallel matrix computer.
//!
//! Fills two random input matrices, prints them, computes sum, difference,
//! and product on a pool of worker threads, then prints the three results.

pub mod app;
pub mod error;
pub mod logging;
pub mod report;

pub use app::{run, Cli};
pub use error::{CliError, Result};
