//! # headercheck
//!
//! A pre-commit hook that verifies source files begin with the project's
//! exact license header block.
//!
//! The check is a strict prefix comparison: each file is read in full,
//! trimmed, and must start with the header for its comment family. Files are
//! never modified and never discovered on disk; the caller names them.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use headercheck::checker::HeaderChecker;
//! use headercheck::driver::{self, DriverOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let checker = HeaderChecker::default();
//!     let paths = vec!["extension/client.ts".to_string(), "README.md".to_string()];
//!
//!     let result = driver::run(&checker, &paths, DriverOptions::default())?;
//!     for path in result.failing() {
//!         println!("{path} is missing its license header");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`checker`] - Single-file header validation
//! * [`headers`] - The expected header texts and the suffix-to-family table
//! * [`exclude`] - Paths exempt from the check
//! * [`driver`] - Argument filtering and aggregation for a whole run
//! * [`report`] - Per-file results and the JSON report
//! * [`output`] - stdout failure report
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`checker`]: crate::checker
//! [`headers`]: crate::headers
//! [`exclude`]: crate::exclude
//! [`driver`]: crate::driver
//! [`report`]: crate::report
//! [`output`]: crate::output
//! [`logging`]: crate::logging

pub mod checker;
pub mod driver;
pub mod exclude;
pub mod headers;
pub mod logging;
pub mod output;
pub mod report;
