//! # Checker Module
//!
//! [`HeaderChecker`] decides whether a single file starts with the license
//! header required for its extension.
//!
//! The whole file is read, its line endings are normalized to `\n` and it is
//! trimmed, then compared against the expected
//! header as an exact prefix. Anything may follow the header. Leading blank
//! lines disappear in the trim, but any other text before the header fails
//! the check.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headercheck::checker::HeaderChecker;
//!
//! # fn main() -> Result<(), headercheck::checker::CheckError> {
//! let checker = HeaderChecker::default();
//! if !checker.check(Path::new("extension/client.ts"))? {
//!   println!("extension/client.ts is missing its license header");
//! }
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::exclude::ExcludeSet;
use crate::headers::HeaderFamily;

/// Error type for header checks.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
  /// The file is missing, not readable, or not valid UTF-8.
  #[error("Failed to read file '{path}': {source}")]
  Unreadable { path: PathBuf, source: std::io::Error },
}

impl CheckError {
  pub fn path(&self) -> &Path {
    match self {
      Self::Unreadable { path, .. } => path,
    }
  }
}

/// Outcome of checking one readable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
  /// The file carries its header, or its extension has no requirement.
  Pass,
  /// The file is on the exclude list and was not compared.
  Excluded,
  /// The file's trimmed content does not start with the expected header.
  Missing,
}

impl CheckStatus {
  pub const fn passed(self) -> bool {
    !matches!(self, Self::Missing)
  }
}

/// Validates license headers against the built-in header texts.
#[derive(Debug, Clone, Default)]
pub struct HeaderChecker {
  excludes: ExcludeSet,
}

impl HeaderChecker {
  /// Creates a checker with a custom exclude set.
  pub const fn new(excludes: ExcludeSet) -> Self {
    Self { excludes }
  }

  pub const fn excludes(&self) -> &ExcludeSet {
    &self.excludes
  }

  /// Returns `Ok(true)` if `path` passes the header check.
  ///
  /// # Errors
  ///
  /// Returns [`CheckError::Unreadable`] if the file cannot be read as text.
  /// This happens before the exclude list is consulted, so an excluded file
  /// that does not exist is still an error.
  pub fn check(&self, path: &Path) -> Result<bool, CheckError> {
    self.inspect(path).map(CheckStatus::passed)
  }

  /// Like [`check`](Self::check), but reports why the file passed.
  pub fn inspect(&self, path: &Path) -> Result<CheckStatus, CheckError> {
    let content = std::fs::read_to_string(path).map_err(|e| CheckError::Unreadable {
      path: path.to_path_buf(),
      source: e,
    })?;

    let status = self.check_content(path, &content);
    debug!("{}: {:?}", path.display(), status);
    Ok(status)
  }

  /// Checks already-loaded `content` as if it had been read from `path`.
  ///
  /// `path` is only used for the exclude lookup and extension dispatch.
  pub fn check_content(&self, path: &Path, content: &str) -> CheckStatus {
    if self.excludes.contains(path) {
      return CheckStatus::Excluded;
    }

    let Some(family) = HeaderFamily::for_path(path) else {
      trace!("{}: no header requirement", path.display());
      return CheckStatus::Pass;
    };

    if trim_text(&normalize_newlines(content)).starts_with(family.expected_header()) {
      CheckStatus::Pass
    } else {
      CheckStatus::Missing
    }
  }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
  if content.contains('\r') {
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
  } else {
    Cow::Borrowed(content)
  }
}

/// Trims Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`,
/// which `str::trim` keeps.
fn trim_text(content: &str) -> &str {
  content.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
