//! # Driver Module
//!
//! Runs [`HeaderChecker`] over the paths a hook passes on the command line.
//!
//! By default only arguments whose file name ends in `.js`, `.ts` or `.mjs`
//! are forwarded to the checker; everything else is skipped without being
//! read. Failing paths are kept in argument order.

use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, trace, warn};

use crate::checker::{CheckError, HeaderChecker};
use crate::headers::HeaderFamily;
use crate::report::{FileReport, FileStatus, ProcessingSummary};

/// Exit status when at least one checked file failed.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status when an unreadable file aborted the run.
pub const EXIT_ABORTED: u8 = 2;

/// Options controlling which arguments are checked and how read errors are
/// handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
  /// Forward every path with a header family, not just the C-style suffixes.
  pub all_families: bool,
  /// Record unreadable files as failures instead of aborting the run.
  pub keep_going: bool,
}

/// Results of a completed run.
#[derive(Debug, Default)]
pub struct RunResult {
  /// One entry per checked argument, in argument order
  pub reports: Vec<FileReport>,
}

impl RunResult {
  /// Failing paths, in argument order, as given on the command line.
  pub fn failing(&self) -> Vec<String> {
    self
      .reports
      .iter()
      .filter(|r| r.status.is_failure())
      .map(|r| r.path.clone())
      .collect()
  }

  pub fn has_failures(&self) -> bool {
    self.reports.iter().any(|r| r.status.is_failure())
  }

  pub fn summary(&self) -> ProcessingSummary {
    ProcessingSummary::from_reports(&self.reports)
  }

  /// Process exit status for this run: `0` or [`EXIT_FAILURE`].
  pub fn exit_status(&self) -> u8 {
    if self.has_failures() { EXIT_FAILURE } else { 0 }
  }

  pub fn exit_code(&self) -> ExitCode {
    ExitCode::from(self.exit_status())
  }
}

/// Returns `true` if the driver forwards `arg` to the checker.
///
/// The test is on the final path segment's name, so `dir/.ts` is forwarded
/// even though the checker later finds it has no extension.
pub fn is_checked_argument(arg: &str, all_families: bool) -> bool {
  let Some(name) = Path::new(arg).file_name().and_then(|n| n.to_str()) else {
    return false;
  };

  let families: &[HeaderFamily] = if all_families {
    &[HeaderFamily::CStyle, HeaderFamily::Hash]
  } else {
    &[HeaderFamily::CStyle]
  };

  families
    .iter()
    .flat_map(|family| family.suffixes())
    .any(|suffix| name.ends_with(&suffix))
}

/// Checks every forwarded argument.
///
/// # Errors
///
/// Without `keep_going`, the first unreadable file stops the run and its
/// error is returned; results for other files are discarded.
pub fn run<S: AsRef<str>>(checker: &HeaderChecker, args: &[S], options: DriverOptions) -> Result<RunResult, CheckError> {
  let mut result = RunResult::default();

  for arg in args.iter().map(|a| a.as_ref()) {
    if !is_checked_argument(arg, options.all_families) {
      trace!("Skipping {arg}: not a checked suffix");
      continue;
    }

    match checker.inspect(Path::new(arg)) {
      Ok(status) => result.reports.push(FileReport::new(arg, FileStatus::from(status))),
      Err(e) if options.keep_going => {
        warn!("{e}");
        let reason = match &e {
          CheckError::Unreadable { source, .. } => source.to_string(),
        };
        result.reports.push(FileReport::unreadable(arg, reason));
      }
      Err(e) => return Err(e),
    }
  }

  debug!("Checked {} of {} arguments", result.reports.len(), args.len());
  Ok(result)
}
