//! Archive packaging for the generated setup files.
//!
//! The archive always holds exactly the two artifacts at `paths::ARTIFACT_PATHS`, written
//! verbatim. Entry metadata is fixed so equal inputs produce byte-identical archives.

#![forbid(unsafe_code)]

mod archive;
mod error;
mod targz;
mod zipfile;

pub use archive::{Archive, ArchiveEntry, ArchiveFormat, pack, pack_entries, pack_with};
pub use error::PackagingError;
