//! Emit a single log line from scripts with the same format Rust callers get.
//!
//! Usage:
//!   termlog info "Processed %d items" 42
//!   termlog --log-level warn debug "dropped"          (prints nothing)
//!   termlog --stderr fatal "config missing: %s" app.toml   (exits 1)

use clap::Parser;
use std::process::ExitCode;
use termlog::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
