//! Artifact metadata and JSON writing shared by the built-in warmers
//!
//! Every compiled artifact embeds a generation timestamp and a short
//! content fingerprint of its source inputs so downstream tooling can
//! detect staleness.

use crate::error::{PrewarmError, PrewarmResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;

/// Generation metadata embedded in every compiled artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,

    /// SHA256 fingerprint of the source inputs (first 12 hex chars)
    pub fingerprint: String,
}

impl ArtifactMeta {
    /// Create metadata stamped with the current time
    pub fn new(fingerprint: String) -> Self {
        Self {
            generated_at: Utc::now(),
            fingerprint,
        }
    }
}

/// Hash source inputs with SHA256, returning the first 12 hex chars
pub fn fingerprint(inputs: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    let result = hasher.finalize();
    hex::encode(&result[..6])
}

/// Serialize a compiled artifact to pretty JSON at `path`.
///
/// Creates the parent directory if it does not exist yet, so warmers
/// are safe to run against a fresh, empty cache directory.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> PrewarmResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| PrewarmError::io(format!("creating directory {}", parent.display()), e))?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
        .await
        .map_err(|e| PrewarmError::io(format!("writing artifact {}", path.display()), e))
}
