use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::trace;
use zip::ZipArchive;
use zip::read::ZipFile;

use crate::error::Result;
use crate::repo::{EntrySource, RawEntry};

pub struct ZipRepo<R: Read + Seek = File> {
    archive: ZipArchive<R>,
}

impl ZipRepo<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let f = File::open(path)?;
        Self::from_reader(f)
    }
}

impl<R: Read + Seek> ZipRepo<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Number of records in the central directory, directories included.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }
}

impl<R: Read + Seek> EntrySource for ZipRepo<R> {
    fn visit_entries(
        &mut self,
        visit: &mut dyn FnMut(RawEntry<'_>) -> Result<()>,
    ) -> Result<()> {
        for index in 0..self.archive.len() {
            let mut zf = self.archive.by_index(index)?;
            if zf.is_dir() {
                trace!(name = zf.name(), "skipping directory record");
                continue;
            }
            let name = stored_name(&zf);
            visit(RawEntry {
                name: &name,
                reader: &mut zf,
            })?;
        }
        Ok(())
    }
}

// Raw bytes as stored, so names written in the host encoding survive even
// when the archive did not flag them as UTF-8.
#[cfg(unix)]
fn stored_name(zf: &ZipFile<'_>) -> OsString {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(zf.name_raw()).to_os_string()
}

#[cfg(not(unix))]
fn stored_name(zf: &ZipFile<'_>) -> OsString {
    OsString::from(zf.name())
}
