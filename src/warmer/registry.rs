//! Warmer lookup by name
//!
//! A plain immutable mapping built once at startup, replacing any
//! dynamic service lookup. Duplicate names are rejected when the
//! registry is built rather than silently shadowed.

use crate::error::{PrewarmError, PrewarmResult};
use crate::warmer::CacheWarmer;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable name-to-warmer lookup table
pub struct WarmerRegistry {
    warmers: HashMap<String, Arc<dyn CacheWarmer>>,
}

impl WarmerRegistry {
    /// Build a registry from a set of warmers
    ///
    /// Fails with `DuplicateWarmer` if two warmers declare the same
    /// name. Lookups are case-sensitive exact match.
    pub fn build(warmers: Vec<Arc<dyn CacheWarmer>>) -> PrewarmResult<Self> {
        let mut map: HashMap<String, Arc<dyn CacheWarmer>> = HashMap::with_capacity(warmers.len());

        for warmer in warmers {
            let name = warmer.name().to_string();
            if map.contains_key(&name) {
                return Err(PrewarmError::DuplicateWarmer(name));
            }
            map.insert(name, warmer);
        }

        Ok(Self { warmers: map })
    }

    /// Check whether a warmer is registered
    pub fn has(&self, name: &str) -> bool {
        self.warmers.contains_key(name)
    }

    /// Look up a warmer by name
    pub fn get(&self, name: &str) -> PrewarmResult<Arc<dyn CacheWarmer>> {
        self.warmers
            .get(name)
            .cloned()
            .ok_or_else(|| PrewarmError::WarmerNotFound(name.to_string()))
    }

    /// Registered warmer names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.warmers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered warmers
    pub fn len(&self) -> usize {
        self.warmers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.warmers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warmer::testing::StubWarmer;

    #[test]
    fn has_matches_get() {
        let registry = WarmerRegistry::build(vec![
            StubWarmer::ok("routes", false, &[]),
            StubWarmer::ok("templates", true, &[]),
        ])
        .unwrap();

        assert!(registry.has("routes"));
        assert!(registry.get("routes").is_ok());
        assert!(!registry.has("missing"));
        assert!(matches!(
            registry.get("missing"),
            Err(PrewarmError::WarmerNotFound(_))
        ));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let registry = WarmerRegistry::build(vec![StubWarmer::ok("routes", false, &[])]).unwrap();
        assert!(!registry.has("Routes"));
    }

    #[test]
    fn empty_registry() {
        let registry = WarmerRegistry::build(vec![]).unwrap();
        assert!(registry.is_empty());
        assert!(!registry.has("missing"));
        assert!(matches!(
            registry.get("missing"),
            Err(PrewarmError::WarmerNotFound(_))
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = WarmerRegistry::build(vec![
            StubWarmer::ok("routes", false, &[]),
            StubWarmer::ok("routes", true, &[]),
        ]);

        match result {
            Err(PrewarmError::DuplicateWarmer(name)) => assert_eq!(name, "routes"),
            _ => panic!("expected DuplicateWarmer"),
        }
    }

    #[test]
    fn names_sorted() {
        let registry = WarmerRegistry::build(vec![
            StubWarmer::ok("templates", true, &[]),
            StubWarmer::ok("config", false, &[]),
            StubWarmer::ok("routes", false, &[]),
        ])
        .unwrap();

        assert_eq!(registry.names(), vec!["config", "routes", "templates"]);
        assert_eq!(registry.len(), 3);
    }
}
