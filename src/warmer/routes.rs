//! Route table cache warmer
//!
//! Compiles the declared routes into a matcher-friendly `routes.json`
//! artifact: static paths sort before parameterized ones, longer
//! literal prefixes first, so a linear matcher tries the most specific
//! route first. Returns each route's controller symbol for preloading.

use super::artifact::{self, ArtifactMeta};
use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const ARTIFACT: &str = "routes.json";

/// Compiles the route table into the cache directory
pub struct RouteWarmer {
    routes_file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RoutesFile {
    route: Vec<RouteDef>,
}

#[derive(Debug, Deserialize)]
struct RouteDef {
    name: String,
    path: String,
    controller: String,
    #[serde(default)]
    methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CompiledRoute {
    name: String,
    path: String,
    controller: String,
    methods: Vec<String>,
    is_static: bool,
}

#[derive(Serialize)]
struct CompiledRoutes {
    meta: ArtifactMeta,
    routes: Vec<CompiledRoute>,
}

impl RouteWarmer {
    pub fn new(routes_file: PathBuf) -> Self {
        Self { routes_file }
    }
}

#[async_trait]
impl CacheWarmer for RouteWarmer {
    fn name(&self) -> &str {
        "routes"
    }

    fn is_optional(&self) -> bool {
        false
    }

    async fn warm_up(&self, cache_dir: &Path, _build_dir: &Path) -> PrewarmResult<Vec<String>> {
        // A missing routes file compiles to an empty table
        let raw = match fs::read_to_string(&self.routes_file).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(PrewarmError::io(
                    format!("reading routes file {}", self.routes_file.display()),
                    e,
                ))
            }
        };

        let file: RoutesFile = toml::from_str(&raw).map_err(|e| PrewarmError::RouteInvalid {
            path: self.routes_file.clone(),
            reason: e.to_string(),
        })?;

        let routes = compile(file.route, &self.routes_file)?;
        debug!("Compiled {} route(s)", routes.len());

        let controllers: Vec<String> = routes.iter().map(|r| r.controller.clone()).collect();
        let compiled = CompiledRoutes {
            meta: ArtifactMeta::new(artifact::fingerprint(&[raw.as_bytes()])),
            routes,
        };

        artifact::write_json(&cache_dir.join(ARTIFACT), &compiled).await?;
        Ok(controllers)
    }
}

/// Order routes for matching: static paths before parameterized ones,
/// longer literal prefixes first. Stable, so routes with equal keys
/// keep their declaration order.
fn compile(defs: Vec<RouteDef>, source: &Path) -> PrewarmResult<Vec<CompiledRoute>> {
    let mut seen = HashSet::new();

    let mut routes = Vec::with_capacity(defs.len());
    for def in defs {
        if !def.path.starts_with('/') {
            return Err(PrewarmError::RouteInvalid {
                path: source.to_path_buf(),
                reason: format!("route \"{}\" path must start with '/'", def.name),
            });
        }
        if !seen.insert(def.name.clone()) {
            return Err(PrewarmError::RouteInvalid {
                path: source.to_path_buf(),
                reason: format!("duplicate route name \"{}\"", def.name),
            });
        }

        let is_static = !def.path.contains('{');
        routes.push(CompiledRoute {
            name: def.name,
            path: def.path,
            controller: def.controller,
            methods: def.methods,
            is_static,
        });
    }

    routes.sort_by_key(|r| (!r.is_static, Reverse(literal_prefix_len(&r.path))));
    Ok(routes)
}

/// Length of the literal prefix before the first path parameter
fn literal_prefix_len(path: &str) -> usize {
    path.find('{').unwrap_or(path.len())
}
