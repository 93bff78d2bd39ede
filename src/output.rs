//! # Output Module
//!
//! All stdout output of headercheck lives here.
//!
//! stdout carries exactly one thing: on failure, the banner line followed by
//! each failing path on its own line, in command-line order. Quiet mode does
//! not suppress it and it is never colored, whatever `--colors` says.
//! Everything else (progress, summaries) goes to stderr.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_verbose;
use crate::report::ProcessingSummary;

/// First line printed when any file fails.
pub const MISSING_BANNER: &str = "Missing license headers";

/// Writes the banner and failing paths to `out`.
///
/// Writes nothing when `failing` is empty.
pub fn write_missing_headers<W: Write>(out: &mut W, failing: &[String]) -> io::Result<()> {
  if failing.is_empty() {
    return Ok(());
  }

  writeln!(out, "{MISSING_BANNER}")?;
  for path in failing {
    writeln!(out, "{path}")?;
  }
  out.flush()
}

/// Prints the failure report to stdout.
pub fn print_missing_headers(failing: &[String]) -> io::Result<()> {
  let stdout = io::stdout();
  let mut handle = stdout.lock();
  write_missing_headers(&mut handle, failing)
}

/// Prints a one-line summary to stderr in verbose mode.
///
/// Format: "Checked N files: X passed, Y excluded, Z missing, W unreadable",
/// followed by the failure count when anything failed.
pub fn print_summary(summary: &ProcessingSummary) {
  if !is_verbose() {
    return;
  }

  let missing = if summary.missing > 0 {
    summary.missing.if_supports_color(Stream::Stderr, |s| s.red()).to_string()
  } else {
    summary.missing.to_string()
  };

  let mut line = format!(
    "Checked {} {}: {} passed, {} excluded, {} missing, {} unreadable",
    summary.total,
    if summary.total == 1 { "file" } else { "files" },
    summary.passed.if_supports_color(Stream::Stderr, |s| s.green()),
    summary.excluded.if_supports_color(Stream::Stderr, |s| s.dimmed()),
    missing,
    summary.unreadable,
  );

  let failures = summary.failures();
  if failures > 0 {
    let failing = format!("{failures} failing");
    line.push_str(&format!(" ({})", failing.if_supports_color(Stream::Stderr, |s| s.red())));
  }

  eprintln!("{line}");
}
