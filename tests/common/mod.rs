#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use headercheck::headers::{C_STYLE_HEADER, HASH_HEADER};

/// Writes a file under `dir`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<()> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Writes a JavaScript-family file that carries the expected header.
pub fn write_licensed_js(dir: &Path, name: &str) -> Result<()> {
  write_file(dir, name, &format!("{C_STYLE_HEADER}\n\nexport const answer = 42;\n"))
}

/// Writes a `#`-family file that carries the expected header.
pub fn write_licensed_hash(dir: &Path, name: &str) -> Result<()> {
  write_file(dir, name, &format!("{HASH_HEADER}\n\nprint('hello')\n"))
}

/// Writes a file with no header at all.
pub fn write_unlicensed(dir: &Path, name: &str) -> Result<()> {
  write_file(dir, name, "console.log('no header');\n")
}
