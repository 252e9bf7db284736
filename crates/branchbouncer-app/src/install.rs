//! Write the generated files straight into a repository, or remove them again.

use crate::generate::RenderedDocuments;
use anyhow::Context;
use branchbouncer_types::paths::{CONFIG_PATH, WORKFLOW_PATH};
use camino::{Utf8Path, Utf8PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitOutput {
    pub written: Vec<Utf8PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveOutput {
    pub removed: Vec<Utf8PathBuf>,
    pub missing: Vec<Utf8PathBuf>,
}

/// Write both documents at their canonical paths under `repo_root`.
///
/// Without `force`, nothing is written when either file already exists. Directories are
/// created before any file is written, and a failed write removes the files this call
/// created, so a failure never leaves a half-installed repository behind.
pub fn run_init(
    repo_root: &Utf8Path,
    documents: &RenderedDocuments,
    force: bool,
) -> anyhow::Result<InitOutput> {
    if !repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {}", repo_root);
    }

    let config_path = repo_root.join(CONFIG_PATH);
    let workflow_path = repo_root.join(WORKFLOW_PATH);
    let files = [
        (config_path, documents.config_yaml.as_str()),
        (workflow_path, documents.workflow_yaml.as_str()),
    ];

    if !force {
        let existing: Vec<&str> = files
            .iter()
            .filter(|(path, _)| path.exists())
            .map(|(path, _)| path.as_str())
            .collect();
        if !existing.is_empty() {
            anyhow::bail!(
                "refusing to overwrite existing files (use --force): {}",
                existing.join(", ")
            );
        }
    }

    for (path, _) in &files {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {}", parent))?;
        }
    }

    let mut written = Vec::with_capacity(files.len());
    let mut created = Vec::new();
    for (path, text) in files {
        let existed = path.exists();
        let result = std::fs::write(&path, text).with_context(|| format!("write file: {}", path));
        if let Err(err) = result {
            roll_back(&created);
            return Err(err);
        }
        tracing::info!(path = %path, "wrote");
        if !existed {
            created.push(path.clone());
        }
        written.push(path);
    }

    Ok(InitOutput { written })
}

fn roll_back(created: &[Utf8PathBuf]) {
    for path in created {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path, "rolled back"),
            Err(err) => tracing::warn!(path = %path, error = %err, "could not roll back"),
        }
    }
}

/// Delete the generated files from `repo_root`. Missing files are reported, not errors.
pub fn run_remove(repo_root: &Utf8Path) -> anyhow::Result<RemoveOutput> {
    if !repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {}", repo_root);
    }

    let mut removed = Vec::new();
    let mut missing = Vec::new();

    for rel in [CONFIG_PATH, WORKFLOW_PATH] {
        let path = repo_root.join(rel);
        if !path.is_file() {
            tracing::debug!(path = %path, "not present");
            missing.push(path);
            continue;
        }
        std::fs::remove_file(&path).with_context(|| format!("remove file: {}", path))?;
        tracing::info!(path = %path, "removed");
        removed.push(path);
    }

    Ok(RemoveOutput { removed, missing })
}
