//! Preload manifest sink
//!
//! Appends preload symbol names to an existing manifest, one per line,
//! preserving order. The manifest is produced by the surrounding build
//! tooling; warmup only ever appends to one that already exists.

use crate::error::{PrewarmError, PrewarmResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// The manifest path for an application in a build directory
pub fn manifest_path(build_dir: &Path, app_name: &str) -> PathBuf {
    build_dir.join(format!("{app_name}.preload"))
}

/// Append symbol names to an existing manifest, one per line.
///
/// Fails with `PathNotFound` when the manifest does not exist; callers
/// decide whether a missing manifest means "skip" or "error".
pub async fn append(manifest: &Path, names: &[String]) -> PrewarmResult<()> {
    if names.is_empty() {
        return Ok(());
    }
    if !manifest.exists() {
        return Err(PrewarmError::PathNotFound(manifest.to_path_buf()));
    }

    let mut lines = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for name in names {
        lines.push_str(name);
        lines.push('\n');
    }

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(manifest)
        .await
        .map_err(|e| PrewarmError::io(format!("opening manifest {}", manifest.display()), e))?;

    file.write_all(lines.as_bytes())
        .await
        .map_err(|e| PrewarmError::io(format!("appending to manifest {}", manifest.display()), e))
}
