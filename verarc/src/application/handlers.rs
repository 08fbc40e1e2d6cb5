use std::path::PathBuf;
use std::process::ExitCode;

use clap::CommandFactory;
use tracing::debug;
use verarc_core::{VerifyOptions, verify};

use crate::presentation::cli::Cli;

pub fn handle_help() -> ExitCode {
    println!("{}", Cli::command().render_help());
    ExitCode::SUCCESS
}

pub fn handle_verify(archive: PathBuf, root: PathBuf) -> ExitCode {
    if !archive.exists() {
        println!("\"{}\" not found", archive.display());
        return ExitCode::FAILURE;
    }

    let opts = VerifyOptions { root };
    match verify(&archive, Some(&opts)) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = %e, archive = %archive.display(), "verification aborted");
            println!(
                "Error reading \"{}\", or it is not a zip archive",
                archive.display()
            );
            ExitCode::FAILURE
        }
    }
}
