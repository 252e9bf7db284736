use crate::archive::ArchiveEntry;
use crate::error::PackagingError;
use flate2::Compression;
use flate2::write::GzEncoder;

pub(crate) fn write(entries: &[ArchiveEntry<'_>]) -> Result<Vec<u8>, PackagingError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    {
        let mut builder = tar::Builder::new(&mut encoder);

        for entry in entries {
            let data = entry.contents.as_bytes();
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(0);
            builder
                .append_data(&mut header, entry.path, data)
                .map_err(|source| PackagingError::Entry {
                    path: entry.path.to_string(),
                    source,
                })?;
        }

        builder.finish()?;
    }
    Ok(encoder.finish()?)
}
