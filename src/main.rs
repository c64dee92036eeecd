//! Command-line entry point.
//!
//! Prints what is being extracted, runs the extraction and turns the result
//! into the process exit code.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unzip::{Cli, Extractor};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the status lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(cli.log_directive()))
        .init();

    println!(
        "Extracting {} to {}",
        cli.file.display(),
        cli.dest.display()
    );

    let result = Extractor::new(cli.request())
        .allow_zip64(cli.allow_zip64())
        .extract()?;

    if !result.is_success() {
        println!("ERROR: {}", result.message());
    }

    Ok(ExitCode::from(result.exit_code()))
}
