//! # Check Command
//!
//! Checks the license headers of the files named on the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use headercheck::checker::HeaderChecker;
use headercheck::driver::{self, DriverOptions};
use headercheck::exclude::ExcludeSet;
use headercheck::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use headercheck::output::{print_missing_headers, print_summary};
use headercheck::report::write_json_report;
use headercheck::{info_log, verbose_log};
use tracing::debug;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Files to check, usually the staged files passed by the hook runner.
  /// Only `.js`, `.ts` and `.mjs` files are checked unless --all-families is
  /// given.
  #[arg(required = false, value_name = "PATH")]
  pub paths: Vec<String>,

  /// Also check `.py`, `.mojo` and `.yaml` files against the `#` header
  #[arg(long)]
  pub all_families: bool,

  /// Report unreadable files as failures instead of aborting the run
  #[arg(long)]
  pub keep_going: bool,

  /// Write a JSON report of every checked file to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all diagnostics. The failure list is still printed.
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the check command with the given arguments.
///
/// Returns the process exit code for a completed run. An error means the run
/// was aborted, normally by an unreadable file.
pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let workspace_root = std::env::current_dir().context("Failed to get current directory")?;
  debug!("Resolving excluded paths against {}", workspace_root.display());

  let checker = HeaderChecker::new(ExcludeSet::default().with_root(workspace_root));
  debug!("{} paths on the exclude list", checker.excludes().len());
  let options = DriverOptions {
    all_families: args.all_families,
    keep_going: args.keep_going,
  };

  verbose_log!("Received {} paths", args.paths.len());

  let result = driver::run(&checker, &args.paths, options)?;
  let summary = result.summary();

  print_missing_headers(&result.failing()).context("Failed to write to stdout")?;
  print_summary(&summary);

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &result.reports, &summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  Ok(result.exit_code())
}
