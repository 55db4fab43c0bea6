//! `streamlog` binary: routing inspection over the library.
//!
//! Usage:
//!   streamlog resolve <config> <stream>...            Show resolved levels
//!   streamlog emit <config> <stream> <level> <msg>... Log one line
//!   streamlog levels                                   List the severity scale

use clap::Parser;
use std::process::ExitCode;
use streamlog::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
