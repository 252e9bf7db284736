//! Shared test utilities for the branchbouncer workspace.
//!
//! The bundle, app and CLI tests all need to look inside generated archives, so the readers
//! live here instead of being copied into each crate's test module.

use anyhow::Context;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

/// Read every file in a zip archive as UTF-8 text, keyed by entry path.
///
/// Directory entries are collected under their path with an empty body so that tests can
/// assert on their absence.
pub fn read_zip_entries(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).context("open zip archive")?;
    let mut out = BTreeMap::new();

    for idx in 0..archive.len() {
        let mut file = archive
            .by_index(idx)
            .with_context(|| format!("read zip entry #{idx}"))?;
        let name = file.name().to_string();
        let mut text = String::new();
        if !file.is_dir() {
            file.read_to_string(&mut text)
                .with_context(|| format!("decode zip entry {name}"))?;
        }
        out.insert(name, text);
    }

    Ok(out)
}

/// Read every file in a gzip-compressed tar archive as UTF-8 text, keyed by entry path.
pub fn read_tar_gz_entries(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, String>> {
    let decoder = flate2::read::GzDecoder::new(Cursor::new(bytes));
    let mut archive = tar::Archive::new(decoder);
    let mut out = BTreeMap::new();

    for entry in archive.entries().context("read tar entries")? {
        let mut entry = entry.context("read tar entry")?;
        let name = entry
            .path()
            .context("tar entry path")?
            .to_string_lossy()
            .replace('\\', "/");
        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .with_context(|| format!("decode tar entry {name}"))?;
        out.insert(name, text);
    }

    Ok(out)
}

/// Detect the archive kind from its magic bytes and read it.
pub fn read_archive_entries(bytes: &[u8]) -> anyhow::Result<BTreeMap<String, String>> {
    match bytes {
        [0x50, 0x4b, ..] => read_zip_entries(bytes),
        [0x1f, 0x8b, ..] => read_tar_gz_entries(bytes),
        _ => anyhow::bail!("unrecognized archive format"),
    }
}
