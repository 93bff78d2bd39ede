//! # Report Module
//!
//! Per-file results of a run, and the optional JSON report written with
//! `--report-json`.
//!
//! The stdout report never says why a file failed. The JSON report does, so
//! CI jobs can tell a missing header from an unreadable file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::checker::CheckStatus;
use crate::headers::HeaderFamily;

/// Final status of a checked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// Header present, or no requirement for the extension
  Pass,
  /// On the exclude list
  Excluded,
  /// Header missing or different from the expected text
  Missing,
  /// File could not be read (only recorded with `--keep-going`)
  Unreadable,
}

impl FileStatus {
  pub const fn is_failure(self) -> bool {
    matches!(self, Self::Missing | Self::Unreadable)
  }
}

impl From<CheckStatus> for FileStatus {
  fn from(status: CheckStatus) -> Self {
    match status {
      CheckStatus::Pass => Self::Pass,
      CheckStatus::Excluded => Self::Excluded,
      CheckStatus::Missing => Self::Missing,
    }
  }
}

/// Result for one path passed on the command line.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// The path exactly as given on the command line
  pub path: String,
  /// Header family the path was held to, if any
  pub family: Option<HeaderFamily>,
  pub status: FileStatus,
  /// Read error message for unreadable files
  pub error: Option<String>,
}

impl FileReport {
  pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
    let path = path.into();
    let family = HeaderFamily::for_path(Path::new(&path));
    Self {
      path,
      family,
      status,
      error: None,
    }
  }

  pub fn unreadable(path: impl Into<String>, error: impl Into<String>) -> Self {
    Self {
      error: Some(error.into()),
      ..Self::new(path, FileStatus::Unreadable)
    }
  }
}

/// Counts by status for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
  pub total: usize,
  pub passed: usize,
  pub excluded: usize,
  pub missing: usize,
  pub unreadable: usize,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport]) -> Self {
    reports.iter().fold(Self::default(), |mut summary, report| {
      summary.total += 1;
      match report.status {
        FileStatus::Pass => summary.passed += 1,
        FileStatus::Excluded => summary.excluded += 1,
        FileStatus::Missing => summary.missing += 1,
        FileStatus::Unreadable => summary.unreadable += 1,
      }
      summary
    })
  }

  pub const fn failures(&self) -> usize {
    self.missing + self.unreadable
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Renders the JSON report document.
pub fn render_json(files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
  serde_json::to_string_pretty(&JsonReport { summary, files }).context("Failed to serialize JSON report")
}

/// Writes the JSON report to `output_path`.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let content = render_json(files, summary)?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
