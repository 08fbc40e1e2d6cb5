use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::compare::compare_entry;
use crate::error::Result;
use crate::repo::EntrySource;
use crate::repo_zip::ZipRepo;
use crate::report::{Findings, Report};
use crate::resolve::resolve_entry_path;

#[derive(Clone, Debug)]
pub struct VerifyOptions {
    /// Directory the archive's contents are expected under.
    pub root: PathBuf,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
        }
    }
}

/// Checks every file in the zip at `archive` against the live filesystem.
///
/// Nothing is reported if any step fails: the first error aborts the run.
pub fn verify(archive: &Path, opts: Option<&VerifyOptions>) -> Result<Report> {
    let mut repo = ZipRepo::open(archive)?;
    info!(archive = %archive.display(), records = repo.len(), "verifying archive");
    verify_source(&mut repo, opts)
}

pub fn verify_source(
    source: &mut dyn EntrySource,
    opts: Option<&VerifyOptions>,
) -> Result<Report> {
    let defaults = VerifyOptions::default();
    let opts = opts.unwrap_or(&defaults);

    let mut findings = Findings::new();
    let mut entries = 0u64;

    source.visit_entries(&mut |entry| {
        let path = resolve_entry_path(&opts.root, entry.name)?;
        let verdict = compare_entry(path, entry.reader)?;
        debug!(?verdict, "entry checked");
        entries += 1;
        findings.push(verdict);
        Ok(())
    })?;

    info!(entries, findings = findings.len(), "verification finished");
    Ok(findings.into_report())
}
