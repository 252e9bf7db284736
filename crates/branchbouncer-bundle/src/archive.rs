use crate::error::PackagingError;
use crate::{targz, zipfile};
use branchbouncer_types::paths::{CONFIG_PATH, DOWNLOAD_STEM, WORKFLOW_PATH};
use std::fmt;
use std::str::FromStr;

/// Container format of the generated bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArchiveFormat {
    #[default]
    Zip,
    TarGz,
}

impl ArchiveFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveFormat::Zip => "zip",
            ArchiveFormat::TarGz => "tar.gz",
        }
    }

    /// Suggested file name for delivering an archive of this format.
    pub fn download_name(self) -> String {
        format!("{}.{}", DOWNLOAD_STEM, self.extension())
    }
}

impl FromStr for ArchiveFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zip" => Ok(ArchiveFormat::Zip),
            "tar-gz" | "tar.gz" | "tgz" => Ok(ArchiveFormat::TarGz),
            other => Err(format!(
                "unknown archive format: {other} (expected zip or tar-gz)"
            )),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Zip => f.write_str("zip"),
            ArchiveFormat::TarGz => f.write_str("tar-gz"),
        }
    }
}

/// One file written into the archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchiveEntry<'a> {
    pub path: &'a str,
    pub contents: &'a str,
}

/// A finalized archive. The bytes cannot be changed once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Archive {
    format: ArchiveFormat,
    bytes: Vec<u8>,
}

impl Archive {
    pub fn format(&self) -> ArchiveFormat {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Package both documents into a zip archive.
pub fn pack(config_text: &str, workflow_text: &str) -> Result<Archive, PackagingError> {
    pack_with(ArchiveFormat::Zip, config_text, workflow_text)
}

/// Package both documents at their canonical paths.
pub fn pack_with(
    format: ArchiveFormat,
    config_text: &str,
    workflow_text: &str,
) -> Result<Archive, PackagingError> {
    let entries = [
        ArchiveEntry {
            path: CONFIG_PATH,
            contents: config_text,
        },
        ArchiveEntry {
            path: WORKFLOW_PATH,
            contents: workflow_text,
        },
    ];
    pack_entries(format, &entries)
}

/// Package arbitrary entries. Fails with [`PackagingError::Empty`] when there are none.
pub fn pack_entries(
    format: ArchiveFormat,
    entries: &[ArchiveEntry<'_>],
) -> Result<Archive, PackagingError> {
    if entries.is_empty() {
        return Err(PackagingError::Empty);
    }

    let bytes = match format {
        ArchiveFormat::Zip => zipfile::write(entries)?,
        ArchiveFormat::TarGz => targz::write(entries)?,
    };

    Ok(Archive { format, bytes })
}
