//! Hand a finished archive to the local filesystem.

use anyhow::Context;
use branchbouncer_bundle::Archive;
use camino::{Utf8Path, Utf8PathBuf};

/// Write `archive` to `out_dir/suggested_name` and return the written path.
///
/// The bytes go to a sibling `.partial` file first and are renamed into place, so the target
/// name never holds a truncated archive.
pub fn deliver(
    archive: &Archive,
    out_dir: &Utf8Path,
    suggested_name: &str,
) -> anyhow::Result<Utf8PathBuf> {
    if suggested_name.is_empty()
        || suggested_name.contains('/')
        || suggested_name.contains('\\')
        || suggested_name == "."
        || suggested_name == ".."
    {
        anyhow::bail!("invalid archive file name: {suggested_name:?}");
    }

    std::fs::create_dir_all(out_dir).with_context(|| format!("create directory: {}", out_dir))?;

    let target = out_dir.join(suggested_name);
    let partial = out_dir.join(format!("{suggested_name}.partial"));

    std::fs::write(&partial, archive.as_bytes())
        .with_context(|| format!("write archive: {}", partial))?;
    if let Err(err) = std::fs::rename(&partial, &target) {
        if let Err(cleanup) = std::fs::remove_file(&partial) {
            tracing::warn!(path = %partial, error = %cleanup, "could not remove partial archive");
        }
        return Err(err).with_context(|| format!("move archive into place: {}", target));
    }

    tracing::info!(path = %target, bytes = archive.len(), "wrote setup archive");
    Ok(target)
}
