//! # CLI tests
//!
//! Drive the `headercheck` binary the way a pre-commit hook does.

mod common;

use std::fs;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

use common::{write_file, write_licensed_hash, write_licensed_js, write_unlicensed};

fn headercheck_cmd(dir: &std::path::Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("headercheck")?;
  cmd.current_dir(dir).env_remove("HEADERCHECK_LOG");
  Ok(cmd)
}

#[test]
fn test_no_arguments_succeeds_silently() -> Result<()> {
  let temp_dir = tempdir()?;

  headercheck_cmd(temp_dir.path())?
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_reports_missing_header() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "src/missing.ts")?;
  write_licensed_js(temp_dir.path(), "src/good.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["src/missing.ts", "src/good.ts"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nsrc/missing.ts\n");

  Ok(())
}

#[test]
fn test_all_good_files_succeed_silently() -> Result<()> {
  let temp_dir = tempdir()?;
  write_licensed_js(temp_dir.path(), "a.js")?;
  write_licensed_js(temp_dir.path(), "b.mjs")?;
  write_licensed_js(temp_dir.path(), "c.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["a.js", "b.mjs", "c.ts"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_failures_keep_argument_order() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "z.ts")?;
  write_unlicensed(temp_dir.path(), "a.js")?;
  write_licensed_js(temp_dir.path(), "m.mjs")?;
  write_unlicensed(temp_dir.path(), "b.mjs")?;

  headercheck_cmd(temp_dir.path())?
    .args(["z.ts", "a.js", "m.mjs", "b.mjs"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nz.ts\na.js\nb.mjs\n");

  Ok(())
}

#[test]
fn test_python_files_are_not_checked_by_default() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "tool.py", "import sys\n")?;
  write_file(temp_dir.path(), "ci.yaml", "on: push\n")?;

  headercheck_cmd(temp_dir.path())?
    .args(["tool.py", "ci.yaml"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_all_families_checks_hash_files() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "tool.py", "import sys\n")?;
  write_licensed_hash(temp_dir.path(), "kernel.mojo")?;
  write_licensed_hash(temp_dir.path(), "ci.yaml")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--all-families", "tool.py", "kernel.mojo", "ci.yaml"])
    .assert()
    .code(1)
    .stdout("Missing license headers\ntool.py\n");

  Ok(())
}

#[test]
fn test_leading_blank_lines_pass() -> Result<()> {
  let temp_dir = tempdir()?;
  let content = format!("\n\n{}\nimport os\n", headercheck::headers::HASH_HEADER);
  write_file(temp_dir.path(), "tool.py", &content)?;

  headercheck_cmd(temp_dir.path())?
    .args(["--all-families", "tool.py"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_excluded_files_pass() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "esbuild.mjs")?;
  write_unlicensed(temp_dir.path(), "extension/logging.ts")?;
  write_unlicensed(temp_dir.path(), "extension/other.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["./esbuild.mjs", "extension/logging.ts", "extension/other.ts"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nextension/other.ts\n");

  Ok(())
}

#[test]
fn test_absolute_excluded_path_passes() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "eslint.config.mjs")?;
  let root = temp_dir.path().canonicalize()?;
  let absolute = root.join("eslint.config.mjs");

  headercheck_cmd(&root)?
    .arg(&absolute)
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_unreadable_file_aborts_with_distinct_code() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["bad.ts", "gone.ts"])
    .assert()
    .code(2)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("gone.ts"));

  Ok(())
}

#[test]
fn test_missing_file_with_unchecked_suffix_is_ignored() -> Result<()> {
  let temp_dir = tempdir()?;

  headercheck_cmd(temp_dir.path())?
    .args(["gone.py", "gone.md"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  Ok(())
}

#[test]
fn test_keep_going_reports_unreadable_files() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--keep-going", "gone.ts", "bad.ts"])
    .assert()
    .code(1)
    .stdout("Missing license headers\ngone.ts\nbad.ts\n")
    .stderr(predicate::str::contains("gone.ts"));

  Ok(())
}

#[test]
fn test_quiet_still_prints_failures() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.js")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--quiet", "bad.js"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nbad.js\n");

  Ok(())
}

#[test]
fn test_verbose_summary_goes_to_stderr() -> Result<()> {
  let temp_dir = tempdir()?;
  write_licensed_js(temp_dir.path(), "good.js")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--verbose", "good.js"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Checked 1 file: 1 passed"));

  Ok(())
}

#[test]
fn test_colors_never_has_no_escape_codes() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;

  let output = headercheck_cmd(temp_dir.path())?
    .args(["--colors=never", "bad.ts"])
    .output()?;

  let stdout = String::from_utf8(output.stdout)?;
  assert!(!stdout.contains("\x1b["));
  assert_eq!(output.status.code(), Some(1));

  Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;
  write_licensed_js(temp_dir.path(), "good.ts")?;
  write_unlicensed(temp_dir.path(), "esbuild.mjs")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--report-json", "report.json", "bad.ts", "good.ts", "esbuild.mjs", "notes.md"])
    .assert()
    .code(1);

  let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(temp_dir.path().join("report.json"))?)?;
  assert_eq!(json["summary"]["total"], 3);
  assert_eq!(json["summary"]["missing"], 1);
  assert_eq!(json["summary"]["excluded"], 1);
  assert_eq!(json["files"][0]["path"], "bad.ts");
  assert_eq!(json["files"][0]["status"], "missing");
  assert_eq!(json["files"][1]["status"], "pass");
  assert_eq!(json["files"][2]["status"], "excluded");

  Ok(())
}

#[test]
fn test_conflicting_verbosity_flags() -> Result<()> {
  let temp_dir = tempdir()?;

  headercheck_cmd(temp_dir.path())?
    .args(["--quiet", "--verbose"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));

  Ok(())
}

#[test]
fn test_crlf_file_with_header_passes() -> Result<()> {
  let temp_dir = tempdir()?;
  let content = format!(
    "{}\r\n\r\nexport {{}};\r\n",
    headercheck::headers::C_STYLE_HEADER.replace('\n', "\r\n")
  );
  write_file(temp_dir.path(), "client.ts", &content)?;
  write_file(temp_dir.path(), "bare.ts", "export {};\r\n")?;

  headercheck_cmd(temp_dir.path())?
    .args(["client.ts", "bare.ts"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nbare.ts\n");

  Ok(())
}

#[test]
fn test_log_env_var_overrides_verbosity() -> Result<()> {
  let temp_dir = tempdir()?;
  write_licensed_js(temp_dir.path(), "good.js")?;
  write_unlicensed(temp_dir.path(), "bad.js")?;

  headercheck_cmd(temp_dir.path())?
    .env("HEADERCHECK_LOG", "debug")
    .args(["good.js", "bad.js"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nbad.js\n")
    .stderr(predicate::str::contains("good.js: Pass").and(predicate::str::contains("bad.js: Missing")));

  Ok(())
}

#[test]
fn test_debug_lines_hidden_without_log_env_var() -> Result<()> {
  let temp_dir = tempdir()?;
  write_licensed_js(temp_dir.path(), "good.js")?;

  headercheck_cmd(temp_dir.path())?
    .arg("good.js")
    .assert()
    .success()
    .stderr(predicate::str::contains("good.js: Pass").not());

  Ok(())
}

#[test]
fn test_colors_always_keeps_banner_plain() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--colors=always", "bad.ts"])
    .assert()
    .code(1)
    .stdout("Missing license headers\nbad.ts\n");

  Ok(())
}

#[test]
fn test_verbose_summary_counts_failures() -> Result<()> {
  let temp_dir = tempdir()?;
  write_unlicensed(temp_dir.path(), "bad.ts")?;

  headercheck_cmd(temp_dir.path())?
    .args(["--verbose", "--keep-going", "bad.ts", "gone.ts"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("1 missing, 1 unreadable (2 failing)"));

  Ok(())
}
