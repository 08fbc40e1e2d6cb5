use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const USAGE: &str = "verify-archive <archive.zip>";

#[derive(Parser, Debug)]
#[command(
    name = "verify-archive",
    author,
    version,
    about = "Check a zip backup against the live filesystem",
    override_usage = USAGE,
    help_template = "{usage-heading} {usage}\n\n{all-args}",
    disable_help_flag = true
)]
pub struct Cli {
    /// the archive to check
    pub archive: Option<PathBuf>,

    /// directory the archive contents are checked against
    #[arg(short, long, default_value = "/")]
    pub root: PathBuf,

    /// show this help message
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}
