pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use std::process::ExitCode;

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match cli.archive {
        Some(archive) if !cli.help => handlers::handle_verify(archive, cli.root),
        // A bare invocation is treated as a help request.
        _ => handlers::handle_help(),
    }
}
