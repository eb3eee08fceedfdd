//! Test doubles for orchestration tests

use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared record of which warmers ran, in order
pub type RunLog = Arc<Mutex<Vec<String>>>;

/// Create an empty run log
pub fn run_log() -> RunLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A scripted warmer returning a fixed preload list or a fixed failure
pub struct StubWarmer {
    name: String,
    optional: bool,
    preload: Vec<String>,
    fail: bool,
    log: Option<RunLog>,
}

impl StubWarmer {
    /// A warmer that succeeds with the given preload list
    pub fn ok(name: &str, optional: bool, preload: &[&str]) -> Arc<dyn CacheWarmer> {
        Arc::new(Self {
            name: name.to_string(),
            optional,
            preload: preload.iter().map(|s| s.to_string()).collect(),
            fail: false,
            log: None,
        })
    }

    /// A succeeding warmer that records its invocation in `log`
    pub fn recorded(
        name: &str,
        optional: bool,
        preload: &[&str],
        log: RunLog,
    ) -> Arc<dyn CacheWarmer> {
        Arc::new(Self {
            name: name.to_string(),
            optional,
            preload: preload.iter().map(|s| s.to_string()).collect(),
            fail: false,
            log: Some(log),
        })
    }

    /// A failing warmer that records its invocation in `log`
    pub fn recorded_failing(name: &str, optional: bool, log: RunLog) -> Arc<dyn CacheWarmer> {
        Arc::new(Self {
            name: name.to_string(),
            optional,
            preload: Vec::new(),
            fail: true,
            log: Some(log),
        })
    }
}

#[async_trait]
impl CacheWarmer for StubWarmer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    async fn warm_up(&self, _cache_dir: &Path, _build_dir: &Path) -> PrewarmResult<Vec<String>> {
        if let Some(ref log) = self.log {
            log.lock().unwrap().push(self.name.clone());
        }
        if self.fail {
            return Err(PrewarmError::Internal(format!(
                "stub warmer {} failed",
                self.name
            )));
        }
        Ok(self.preload.clone())
    }
}
