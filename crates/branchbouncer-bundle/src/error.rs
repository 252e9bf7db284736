use thiserror::Error;

/// The archive could not be finalized. No partial archive is returned.
#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("archive has no entries")]
    Empty,

    #[error("failed to write archive entry {path}")]
    Entry {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("zip encoder failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
