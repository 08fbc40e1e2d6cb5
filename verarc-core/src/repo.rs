// verarc_core/src/repo.rs
use crate::error::Result;
use std::ffi::OsStr;
use std::io::Read;

/// One stored file, valid for a single visit.
pub struct RawEntry<'a> {
    /// Stored name, reinterpreted in the host path encoding.
    pub name: &'a OsStr,
    /// Decompressed content.
    pub reader: &'a mut dyn Read,
}

pub trait EntrySource {
    /// Calls `visit` once per file entry, in archive order. Directory records
    /// are not visited. The first error from `visit` stops the traversal.
    fn visit_entries(
        &mut self,
        visit: &mut dyn FnMut(RawEntry<'_>) -> Result<()>,
    ) -> Result<()>;
}
