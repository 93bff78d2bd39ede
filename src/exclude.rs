//! # Exclude Module
//!
//! Fixed list of repository-relative paths whose headers legitimately differ
//! from the standard block (tool configs, vendored sources) and are therefore
//! never checked.
//!
//! Membership is path-semantic: `./package.json` and `package.json` name the
//! same entry. Absolute paths are made relative to the workspace root before
//! comparison when a root is known.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::trace;

/// Paths exempt from the header check by default.
pub const DEFAULT_EXCLUDES: &[&str] = &[
  ".pre-commit-config.yaml",
  "package.json",
  "package-lock.json",
  "language-configuration.json",
  "extension/external/psList.ts",
  "extension/server/RpcServer.ts",
  "extension/logging.ts",
  "esbuild.mjs",
  "eslint.config.mjs",
  ".vscode-test.mjs",
];

/// Set of paths exempt from header validation.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
  paths: HashSet<PathBuf>,
  root: Option<PathBuf>,
}

impl Default for ExcludeSet {
  fn default() -> Self {
    Self::from_paths(DEFAULT_EXCLUDES.iter().copied())
  }
}

impl ExcludeSet {
  /// Creates an empty set. Nothing is excluded.
  pub fn empty() -> Self {
    Self {
      paths: HashSet::new(),
      root: None,
    }
  }

  /// Builds a set from relative path strings.
  pub fn from_paths<I, P>(paths: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
  {
    Self {
      paths: paths.into_iter().map(|p| normalize(p.as_ref())).collect(),
      root: None,
    }
  }

  /// Sets the directory absolute input paths are made relative to.
  pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
    self.root = Some(root.into());
    self
  }

  /// Returns `true` if `path` names one of the excluded files.
  pub fn contains(&self, path: &Path) -> bool {
    if self.is_empty() {
      return false;
    }

    let relative = match (&self.root, path.is_absolute()) {
      (Some(root), true) => match pathdiff::diff_paths(path, root) {
        Some(rel) => rel,
        None => return false,
      },
      _ => path.to_path_buf(),
    };

    let found = self.paths.contains(&normalize(&relative));
    if found {
      trace!("{} is on the exclude list", path.display());
    }
    found
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }
}

/// Drops `.` components so `./a/./b` compares equal to `a/b`.
fn normalize(path: &Path) -> PathBuf {
  path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
