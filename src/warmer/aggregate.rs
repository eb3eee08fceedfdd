//! Warmer aggregate
//!
//! Runs the registered warmers as one pass: strictly sequential, in
//! registration order, concatenating the preload lists they return.
//! Warmers may depend on artifacts an earlier warmer wrote, so the
//! pass never reorders or parallelizes them.

use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates a full warmup pass over an ordered warmer list
///
/// Optional warmers are skipped unless `enable_optional_warmers` was
/// called; the flag is sticky across runs on the same instance. The
/// underlying warmer list is fixed at construction, so the same
/// aggregate can run repeatedly with different flag values.
pub struct WarmerAggregate {
    warmers: Vec<Arc<dyn CacheWarmer>>,
    optional_enabled: bool,
    fail_fast: bool,
}

impl WarmerAggregate {
    /// Create an aggregate over an ordered warmer list
    ///
    /// Optional warmers start disabled and the pass aborts on the
    /// first warmer failure.
    pub fn new(warmers: Vec<Arc<dyn CacheWarmer>>) -> Self {
        Self {
            warmers,
            optional_enabled: false,
            fail_fast: true,
        }
    }

    /// Set the failure policy
    ///
    /// With `fail_fast` disabled, the pass runs every warmer in the
    /// working set and fails at the end naming all failed warmers.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Include optional warmers in subsequent passes. Idempotent.
    pub fn enable_optional_warmers(&mut self) {
        self.optional_enabled = true;
    }

    /// Whether optional warmers are included
    pub fn optional_enabled(&self) -> bool {
        self.optional_enabled
    }

    /// The warmers this aggregate holds, in execution order
    pub fn warmers(&self) -> &[Arc<dyn CacheWarmer>] {
        &self.warmers
    }

    /// Working set for the current flag value, preserving order
    fn working_set(&self) -> impl Iterator<Item = &Arc<dyn CacheWarmer>> {
        let optional_enabled = self.optional_enabled;
        self.warmers
            .iter()
            .filter(move |w| optional_enabled || !w.is_optional())
    }

    /// Run the full warmup pass
    ///
    /// Returns the concatenation of each executed warmer's preload
    /// list in execution order, never reordered or deduplicated. A
    /// warmer failure aborts the pass (or, with fail-fast disabled,
    /// is collected and reported once every warmer has run); no
    /// partial preload list is returned on failure.
    pub async fn warm_up(&self, cache_dir: &Path, build_dir: &Path) -> PrewarmResult<Vec<String>> {
        let mut preload = Vec::new();
        let mut failed: Vec<String> = Vec::new();

        for warmer in self.working_set() {
            debug!("Running cache warmer: {}", warmer.name());

            match warmer.warm_up(cache_dir, build_dir).await {
                Ok(names) => {
                    debug!(
                        "Cache warmer {} returned {} preload symbol(s)",
                        warmer.name(),
                        names.len()
                    );
                    preload.extend(names);
                }
                Err(e) if self.fail_fast => {
                    return Err(PrewarmError::warmer_failed(warmer.name(), e));
                }
                Err(e) => {
                    warn!("Cache warmer {} failed: {}", warmer.name(), e);
                    failed.push(warmer.name().to_string());
                }
            }
        }

        if !failed.is_empty() {
            return Err(PrewarmError::WarmersFailed {
                count: failed.len(),
                warmers: failed.join(", "),
            });
        }

        Ok(preload)
    }
}
