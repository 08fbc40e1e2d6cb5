use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("unsafe entry path: {0}")]
    UnsafePath(String),

    #[error("entry has no path below the archive's top-level directory: {0}")]
    NoPathBelowWrapper(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, VerifyError>;
