#![forbid(unsafe_code)]

pub mod error;

pub mod compare;
pub mod hash;
pub mod report;
pub mod repo;
pub mod repo_zip;
pub mod resolve;
pub mod verify;

// Re-exports: stable API surface
pub use compare::{Verdict, compare_entry};
pub use hash::ContentHash;
pub use report::{Finding, FindingKind, Findings, Report};
pub use verify::{VerifyOptions, verify, verify_source};
