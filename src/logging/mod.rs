//! # Logging Module
//!
//! Logging utilities for headercheck:
//! - Structured diagnostics through `tracing`, written to stderr
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//!
//! Diagnostics never go to stdout, which carries only the failure report so
//! that hook runners and scripts can consume it unchanged.
//!
//! ## Example
//!
//! ```rust
//! use headercheck::logging::{ColorMode, set_verbose};
//! use headercheck::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Let owo-colors decide based on whether the stream is a TTY
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Checking file: {}", "index.ts");
//!
//! // Log an info message (goes to stderr)
//! info_log!("{} files checked", 3);
//! ```

mod modes;

pub use modes::{ColorMode, LOG_ENV_VAR, default_filter, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs an informational message to stderr unless quiet mode is enabled.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message to stderr, in yellow when stderr supports it.
///
/// Used by the [`info_log!`] macro.
pub fn print_info_log(message: &str) {
  eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
}
