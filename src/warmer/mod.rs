//! Cache warmer orchestration
//!
//! The warmer contract, the registry for selective invocation, the
//! aggregate that runs a full pass, and the built-in warmers that
//! compile application artifacts into the cache directory.

mod aggregate;
mod artifact;
mod contract;
mod registry;
#[cfg(test)]
pub(crate) mod testing;

pub mod config;
pub mod routes;
pub mod services;
pub mod templates;

pub use aggregate::WarmerAggregate;
pub use contract::CacheWarmer;
pub use registry::WarmerRegistry;

use std::sync::Arc;

/// Build the built-in warmers in their execution order.
///
/// Order matters: later warmers may read artifacts earlier warmers
/// wrote into the cache directory.
pub fn default_warmers(app_config: &crate::config::Config) -> Vec<Arc<dyn CacheWarmer>> {
    vec![
        Arc::new(config::ConfigWarmer::new(
            app_config.resolve(&app_config.app.config_dir),
        )),
        Arc::new(routes::RouteWarmer::new(
            app_config.resolve(&app_config.app.routes_file),
        )),
        Arc::new(services::ServiceWarmer::new(
            app_config.resolve(&app_config.app.services_file),
        )),
        Arc::new(templates::TemplateWarmer::new(
            app_config.resolve(&app_config.app.templates_dir),
        )),
    ]
}
