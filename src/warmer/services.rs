//! Service graph cache warmer
//!
//! Resolves the declared services into a dependency-first
//! initialization order and writes it to `services.json`. Returns each
//! service's class in initialization order so the runtime can preload
//! them before wiring the graph.

use super::artifact::{self, ArtifactMeta};
use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const ARTIFACT: &str = "services.json";

/// Compiles the service graph into the cache directory
pub struct ServiceWarmer {
    services_file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServicesFile {
    service: Vec<ServiceDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceDef {
    id: String,
    class: String,
    #[serde(default)]
    deps: Vec<String>,
}

#[derive(Serialize)]
struct CompiledServices {
    meta: ArtifactMeta,
    services: Vec<ServiceDef>,
}

impl ServiceWarmer {
    pub fn new(services_file: PathBuf) -> Self {
        Self { services_file }
    }
}

#[async_trait]
impl CacheWarmer for ServiceWarmer {
    fn name(&self) -> &str {
        "services"
    }

    fn is_optional(&self) -> bool {
        false
    }

    async fn warm_up(&self, cache_dir: &Path, _build_dir: &Path) -> PrewarmResult<Vec<String>> {
        // A missing services file compiles to an empty graph
        let raw = match fs::read_to_string(&self.services_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(PrewarmError::io(
                    format!("reading services file {}", self.services_file.display()),
                    e,
                ))
            }
        };

        let file: ServicesFile =
            toml::from_str(&raw).map_err(|e| PrewarmError::ServiceInvalid {
                path: self.services_file.clone(),
                reason: e.to_string(),
            })?;

        let ordered = resolve_order(&file.service, &self.services_file)?;
        debug!("Resolved {} service(s)", ordered.len());

        let classes: Vec<String> = ordered.iter().map(|s| s.class.clone()).collect();
        let compiled = CompiledServices {
            meta: ArtifactMeta::new(artifact::fingerprint(&[raw.as_bytes()])),
            services: ordered.into_iter().cloned().collect(),
        };

        artifact::write_json(&cache_dir.join(ARTIFACT), &compiled).await?;
        Ok(classes)
    }
}

enum Visit {
    InProgress,
    Done,
}

/// Dependency-first ordering over the declared services.
///
/// Services are visited in declaration order, so independent subgraphs
/// keep a deterministic order. A dependency cycle or a reference to an
/// undeclared service fails the resolution.
fn resolve_order<'a>(
    defs: &'a [ServiceDef],
    source: &Path,
) -> PrewarmResult<Vec<&'a ServiceDef>> {
    let mut by_id: HashMap<&str, &ServiceDef> = HashMap::with_capacity(defs.len());
    for def in defs {
        if by_id.insert(def.id.as_str(), def).is_some() {
            return Err(PrewarmError::ServiceInvalid {
                path: source.to_path_buf(),
                reason: format!("duplicate service id \"{}\"", def.id),
            });
        }
    }

    let mut state: HashMap<&str, Visit> = HashMap::with_capacity(defs.len());
    let mut order = Vec::with_capacity(defs.len());

    for def in defs {
        visit(def, &by_id, &mut state, &mut order, source)?;
    }

    Ok(order)
}

fn visit<'a>(
    def: &'a ServiceDef,
    by_id: &HashMap<&str, &'a ServiceDef>,
    state: &mut HashMap<&'a str, Visit>,
    order: &mut Vec<&'a ServiceDef>,
    source: &Path,
) -> PrewarmResult<()> {
    match state.get(def.id.as_str()) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => return Err(PrewarmError::ServiceCycle(def.id.clone())),
        None => {}
    }

    state.insert(&def.id, Visit::InProgress);

    for dep in &def.deps {
        let dep_def = by_id
            .get(dep.as_str())
            .copied()
            .ok_or_else(|| PrewarmError::ServiceInvalid {
                path: source.to_path_buf(),
                reason: format!("service \"{}\" depends on unknown service \"{dep}\"", def.id),
            })?;
        visit(dep_def, by_id, state, order, source)?;
    }

    state.insert(&def.id, Visit::Done);
    order.push(def);
    Ok(())
}
