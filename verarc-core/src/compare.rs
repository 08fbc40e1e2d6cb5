use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::hash::ContentHash;

/// Outcome of checking one archived file against the live filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Missing {
        path: PathBuf,
        archive: ContentHash,
    },
    Mismatch {
        path: PathBuf,
        live: ContentHash,
        archive: ContentHash,
    },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Verdict::Match => None,
            Verdict::Missing { path, .. } | Verdict::Mismatch { path, .. } => Some(path),
        }
    }
}

/// Compares the live file at `path` with the archived bytes.
///
/// The archived stream is always read to the end. A live path that cannot be
/// stat'ed counts as absent; a failure reading either side once the live file
/// is known to exist is returned as an error rather than a verdict.
pub fn compare_entry(path: PathBuf, archived: &mut dyn Read) -> Result<Verdict> {
    if !path.exists() {
        let archive = ContentHash::of_reader(archived)?;
        return Ok(Verdict::Missing { path, archive });
    }

    if !path.is_file() {
        warn!(path = %path.display(), "live path is not a regular file");
    }
    let live = ContentHash::of_file(&path)?;
    let archive = ContentHash::of_reader(archived)?;

    if live == archive {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch {
            path,
            live,
            archive,
        })
    }
}
