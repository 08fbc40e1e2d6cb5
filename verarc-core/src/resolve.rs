use crate::error::{Result, VerifyError};

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Maps a stored entry name onto the live filesystem.
///
/// The first `/`-separated segment is the archive's top-level wrapper
/// directory and is dropped; the remaining segments are joined under `root`.
/// Empty and `.` segments are ignored. A `..` segment, or a name with nothing
/// below the wrapper, is rejected.
pub fn resolve_entry_path(root: &Path, stored: &OsStr) -> Result<PathBuf> {
    let mut out = root.to_path_buf();
    let mut kept = 0usize;
    for seg in segments(stored).into_iter().skip(1) {
        if seg.is_empty() || seg == "." {
            continue;
        }
        if seg == ".." {
            return Err(VerifyError::UnsafePath(stored.to_string_lossy().into_owned()));
        }
        out.push(seg);
        kept += 1;
    }
    if kept == 0 {
        return Err(VerifyError::NoPathBelowWrapper(
            stored.to_string_lossy().into_owned(),
        ));
    }
    Ok(out)
}

#[cfg(unix)]
fn segments(stored: &OsStr) -> Vec<OsString> {
    use std::os::unix::ffi::OsStrExt;
    stored
        .as_bytes()
        .split(|b| *b == b'/')
        .map(|s| OsStr::from_bytes(s).to_os_string())
        .collect()
}

#[cfg(not(unix))]
fn segments(stored: &OsStr) -> Vec<OsString> {
    stored
        .to_string_lossy()
        .split('/')
        .map(OsString::from)
        .collect()
}
