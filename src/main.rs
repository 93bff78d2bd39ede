//! # headercheck
//!
//! A pre-commit hook that verifies source files begin with the project's
//! license header.

mod cli;

use std::process::ExitCode;

use headercheck::driver::EXIT_ABORTED;
use owo_colors::{OwoColorize, Stream};

use crate::cli::{Cli, run_check};

fn main() -> ExitCode {
  let cli = Cli::parse_args();

  match run_check(cli.check_args) {
    Ok(code) => code,
    Err(e) => {
      eprintln!("{} {:#}", "ERROR:".if_supports_color(Stream::Stderr, |s| s.red()), e);
      ExitCode::from(EXIT_ABORTED)
    }
  }
}
