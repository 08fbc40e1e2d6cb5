use crate::error::Result;

use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const HASH_LEN: usize = 32;

/// Hex characters shown for a hash in reports.
pub const SHORT_HEX_LEN: usize = 8;

/// SHA-256 digest of a file's full content.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; HASH_LEN]);

impl ContentHash {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(bytes).as_slice())
    }

    /// Hashes a stream to EOF without buffering it whole.
    pub fn of_reader(reader: &mut dyn Read) -> Result<Self> {
        let mut hasher = Sha256::new();
        let bytes = io::copy(reader, &mut hasher)?;
        tracing::trace!(bytes, "stream hashed");
        Ok(Self::from_digest(hasher.finalize().as_slice()))
    }

    pub fn of_file(path: &Path) -> Result<Self> {
        let mut f = File::open(path)?;
        Self::of_reader(&mut f)
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut out = [0u8; HASH_LEN];
        out.copy_from_slice(digest);
        Self(out)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Leading hex characters used when rendering findings.
    pub fn short(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(SHORT_HEX_LEN);
        s
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}
