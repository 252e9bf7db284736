use crate::archive::ArchiveEntry;
use crate::error::PackagingError;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub(crate) fn write(entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>, PackagingError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    // Fixed timestamp: the DOS epoch.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    for entry in entries {
        writer.start_file(entry.path, options)?;
        writer
            .write_all(entry.contents.as_bytes())
            .map_err(|source| PackagingError::Entry {
                path: entry.path.to_string(),
                source,
            })?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
