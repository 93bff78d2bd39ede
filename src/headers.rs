//! # Headers Module
//!
//! The two license header blocks a checked file must start with, and the
//! table that maps a file suffix to the header family it is held to.
//!
//! Both headers are stored already trimmed, so they can be compared directly
//! against trimmed file content with [`str::starts_with`].

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Header required at the top of `//`-commented files (JavaScript family).
pub const C_STYLE_HEADER: &str = concat!(
  "//===----------------------------------------------------------------------===//\n",
  "// Copyright (c) 2025, Modular Inc. All rights reserved.\n",
  "//\n",
  "// Licensed under the Apache License v2.0 with LLVM Exceptions:\n",
  "// https://llvm.org/LICENSE.txt\n",
  "//\n",
  "// Unless required by applicable law or agreed to in writing, software\n",
  "// distributed under the License is distributed on an \"AS IS\" BASIS,\n",
  "// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n",
  "// See the License for the specific language governing permissions and\n",
  "// limitations under the License.\n",
  "//===----------------------------------------------------------------------===//",
);

/// Header required at the top of `#`-commented files (Python, Mojo, YAML).
pub const HASH_HEADER: &str = concat!(
  "# ===----------------------------------------------------------------------=== #\n",
  "# Copyright (c) 2025, Modular Inc. All rights reserved.\n",
  "#\n",
  "# Licensed under the Apache License v2.0 with LLVM Exceptions:\n",
  "# https://llvm.org/LICENSE.txt\n",
  "#\n",
  "# Unless required by applicable law or agreed to in writing, software\n",
  "# distributed under the License is distributed on an \"AS IS\" BASIS,\n",
  "# WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n",
  "# See the License for the specific language governing permissions and\n",
  "# limitations under the License.\n",
  "# ===----------------------------------------------------------------------=== #",
);

/// Comment-delimiter family that decides which header a file must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderFamily {
  /// `//` line comments
  CStyle,
  /// `#` line comments
  Hash,
}

/// Suffix (without the leading dot) to family table.
///
/// A suffix missing from this table carries no header requirement.
pub const EXTENSION_FAMILIES: &[(&str, HeaderFamily)] = &[
  ("js", HeaderFamily::CStyle),
  ("ts", HeaderFamily::CStyle),
  ("mjs", HeaderFamily::CStyle),
  ("py", HeaderFamily::Hash),
  ("mojo", HeaderFamily::Hash),
  ("yaml", HeaderFamily::Hash),
];

impl HeaderFamily {
  /// The exact header text files of this family must start with.
  pub const fn expected_header(self) -> &'static str {
    match self {
      Self::CStyle => C_STYLE_HEADER,
      Self::Hash => HASH_HEADER,
    }
  }

  /// Looks up the family for a bare suffix such as `"ts"`.
  ///
  /// Matching is exact and case-sensitive: `FOO.JS` has no requirement.
  pub fn for_extension(ext: &str) -> Option<Self> {
    EXTENSION_FAMILIES
      .iter()
      .find(|(suffix, _)| *suffix == ext)
      .map(|(_, family)| *family)
  }

  /// Classifies a path by its final extension.
  ///
  /// Dotfiles such as `.ts` have no extension and therefore no family.
  pub fn for_path(path: &Path) -> Option<Self> {
    path.extension().and_then(|ext| ext.to_str()).and_then(Self::for_extension)
  }

  /// All suffixes that map to this family, with their leading dot.
  pub fn suffixes(self) -> impl Iterator<Item = String> {
    EXTENSION_FAMILIES
      .iter()
      .filter(move |(_, family)| *family == self)
      .map(|(suffix, _)| format!(".{suffix}"))
  }
}

impl fmt::Display for HeaderFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::CStyle => write!(f, "c-style"),
      Self::Hash => write!(f, "hash"),
    }
  }
}
