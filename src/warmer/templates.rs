//! Template index cache warmer
//!
//! Walks the templates directory and writes an index of logical name,
//! relative path, content hash, and size to `templates.json`. Optional:
//! a default pass skips it, since rendering works without the index.

use super::artifact::{self, ArtifactMeta};
use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

const ARTIFACT: &str = "templates.json";

/// Indexes the application templates into the cache directory
pub struct TemplateWarmer {
    templates_dir: PathBuf,
}

#[derive(Serialize)]
struct TemplateIndex {
    meta: ArtifactMeta,
    templates: Vec<TemplateEntry>,
}

#[derive(Serialize)]
struct TemplateEntry {
    name: String,
    path: String,
    hash: String,
    size: u64,
}

impl TemplateWarmer {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    async fn index(&self) -> PrewarmResult<Vec<TemplateEntry>> {
        // A missing templates directory yields an empty index
        if !self.templates_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.templates_dir) {
            let entry = entry.map_err(|e| {
                PrewarmError::io(
                    format!("walking templates dir {}", self.templates_dir.display()),
                    e.into(),
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&self.templates_dir)
                .unwrap_or(entry.path());
            let name = logical_name(rel);

            let contents = fs::read(entry.path()).await.map_err(|e| {
                PrewarmError::io(format!("reading template {}", entry.path().display()), e)
            })?;

            entries.push(TemplateEntry {
                name,
                path: rel.display().to_string(),
                hash: artifact::fingerprint(&[&contents]),
                size: contents.len() as u64,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[async_trait]
impl CacheWarmer for TemplateWarmer {
    fn name(&self) -> &str {
        "templates"
    }

    fn is_optional(&self) -> bool {
        true
    }

    async fn warm_up(&self, cache_dir: &Path, _build_dir: &Path) -> PrewarmResult<Vec<String>> {
        let templates = self.index().await?;
        debug!("Indexed {} template(s)", templates.len());

        let inputs: Vec<&[u8]> = templates
            .iter()
            .flat_map(|t| [t.name.as_bytes(), t.hash.as_bytes()])
            .collect();
        let index = TemplateIndex {
            meta: ArtifactMeta::new(artifact::fingerprint(&inputs)),
            templates,
        };

        artifact::write_json(&cache_dir.join(ARTIFACT), &index).await?;

        // Templates are data, not symbols: nothing to preload
        Ok(Vec::new())
    }
}

/// Logical template name: relative path with '/' separators
fn logical_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
