//! Cache warmer contract
//!
//! Provides the trait every warmup task implements so the aggregate
//! can orchestrate heterogeneous warmers through one interface.

use crate::error::PrewarmResult;
use async_trait::async_trait;
use std::path::Path;

/// A single cache warmup task
///
/// Implementations perform an idempotent precomputation that writes
/// derived artifacts into `cache_dir`. Warmers may read already-built
/// artifacts from `build_dir`, which differs from `cache_dir` in split
/// build/runtime deployments. Warming an empty `cache_dir` is the
/// expected precondition for a full pass, so implementations must
/// create whatever directory structure they need.
#[async_trait]
pub trait CacheWarmer: Send + Sync {
    /// Unique warmer name, used for selective invocation
    fn name(&self) -> &str;

    /// Whether this warmer is skipped during a default pass
    ///
    /// Optional warmers run only when the aggregate has them
    /// explicitly enabled. Pure query, no side effects.
    fn is_optional(&self) -> bool;

    /// Perform the warmup, returning preload symbol names
    ///
    /// The returned list is ordered and may contain duplicates; the
    /// aggregate concatenates it verbatim onto the pass result.
    async fn warm_up(&self, cache_dir: &Path, build_dir: &Path) -> PrewarmResult<Vec<String>>;
}
