use clap::Parser;
use std::process::ExitCode;

use crate::cli::{Cli, run};

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod generate;
pub mod logging;

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()) {
        Ok(summary) => {
            println!(
                "seed: {}, files: {}, rows: {}",
                summary.seed, summary.files, summary.rows
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = ?err, "fixture generation failed");
            ExitCode::FAILURE
        }
    }
}
