//! Configuration cache warmer
//!
//! Merges the application's TOML configuration fragments into a single
//! compiled `config.json` artifact. Fragments are merged in
//! lexicographic filename order; later fragments override earlier ones
//! at top-level key granularity. A fragment's top-level `preload` array
//! names symbols to eagerly load, collected in merge order.

use super::artifact::{self, ArtifactMeta};
use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const ARTIFACT: &str = "config.json";

/// Compiles the application configuration into the cache directory
pub struct ConfigWarmer {
    config_dir: PathBuf,
}

#[derive(Serialize)]
struct CompiledConfig {
    meta: ArtifactMeta,
    config: toml::value::Table,
}

impl ConfigWarmer {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// All `*.toml` fragments in the config directory, sorted by name.
    ///
    /// A missing directory yields no fragments rather than an error.
    async fn fragments(&self) -> PrewarmResult<Vec<PathBuf>> {
        let mut entries = match fs::read_dir(&self.config_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PrewarmError::io(
                    format!("reading config directory {}", self.config_dir.display()),
                    e,
                ))
            }
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            PrewarmError::io(
                format!("reading config directory {}", self.config_dir.display()),
                e,
            )
        })? {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }
}

#[async_trait]
impl CacheWarmer for ConfigWarmer {
    fn name(&self) -> &str {
        "config"
    }

    fn is_optional(&self) -> bool {
        false
    }

    async fn warm_up(&self, cache_dir: &Path, _build_dir: &Path) -> PrewarmResult<Vec<String>> {
        let fragments = self.fragments().await?;
        debug!("Merging {} config fragment(s)", fragments.len());

        let mut merged = toml::value::Table::new();
        let mut preload = Vec::new();
        let mut raw_fragments = Vec::with_capacity(fragments.len());

        for path in &fragments {
            let raw = fs::read_to_string(path)
                .await
                .map_err(|e| PrewarmError::io(format!("reading fragment {}", path.display()), e))?;

            let table: toml::value::Table =
                toml::from_str(&raw).map_err(|e| PrewarmError::ConfigInvalid {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

            for (key, value) in table {
                if key == "preload" {
                    preload.extend(preload_symbols(&value, path)?);
                } else {
                    merged.insert(key, value);
                }
            }

            raw_fragments.push(raw.into_bytes());
        }

        let inputs: Vec<&[u8]> = raw_fragments.iter().map(Vec::as_slice).collect();
        let compiled = CompiledConfig {
            meta: ArtifactMeta::new(artifact::fingerprint(&inputs)),
            config: merged,
        };

        artifact::write_json(&cache_dir.join(ARTIFACT), &compiled).await?;
        Ok(preload)
    }
}

/// Extract the symbol names from a fragment's `preload` array
fn preload_symbols(value: &toml::Value, path: &Path) -> PrewarmResult<Vec<String>> {
    let entries = value.as_array().ok_or_else(|| PrewarmError::ConfigInvalid {
        path: path.to_path_buf(),
        reason: "preload must be an array of strings".to_string(),
    })?;

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| PrewarmError::ConfigInvalid {
                    path: path.to_path_buf(),
                    reason: "preload must be an array of strings".to_string(),
                })
        })
        .collect()
}
