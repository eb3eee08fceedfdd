//! Warmup command - run cache warmers and assemble the preload list

use crate::cli::args::WarmupArgs;
use crate::config::Config;
use crate::error::{PrewarmError, PrewarmResult};
use crate::preload;
use crate::ui::{self, UiContext};
use crate::warmer::{default_warmers, WarmerAggregate, WarmerRegistry};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing::{debug, info};

/// Execute the warmup command
pub async fn execute(args: WarmupArgs, config: &Config) -> PrewarmResult<()> {
    let ctx = UiContext::detect();
    let cache_dir = config.cache_dir();
    let build_dir = config.build_dir();

    fs::create_dir_all(&cache_dir).await.map_err(|e| {
        PrewarmError::io(format!("creating cache directory {}", cache_dir.display()), e)
    })?;

    let warmers = default_warmers(config);

    // Selective mode: run one warmer, ignoring the aggregate and the
    // optional-skip flag
    if let Some(ref name) = args.warmer {
        let registry = WarmerRegistry::build(warmers)?;
        let warmer = registry.get(name)?;

        debug!("Running cache warmer {} selectively", name);
        warmer
            .warm_up(&cache_dir, &build_dir)
            .await
            .map_err(|e| PrewarmError::warmer_failed(name.clone(), e))?;

        ui::step_ok_detail(
            &ctx,
            &format!("Cache warmer \"{name}\" completed"),
            &cache_dir.display().to_string(),
        );
        return Ok(());
    }

    // Full mode
    let mut aggregate = WarmerAggregate::new(warmers).with_fail_fast(config.warmup.fail_fast);
    if !args.no_optional_warmers {
        aggregate.enable_optional_warmers();
    }

    info!(
        "Warming up the cache for the {} environment with debug {}",
        config.general.environment, config.general.debug
    );

    let pb = create_progress_bar(&format!(
        "Warming up the cache for the {} environment...",
        config.general.environment
    ));
    let result = aggregate.warm_up(&cache_dir, &build_dir).await;
    pb.finish_and_clear();

    let preload_names = result?;
    debug!("Pass produced {} preload symbol(s)", preload_names.len());

    // The preload manifest is only appended in single-location
    // deployments where a build step already produced it
    if !preload_names.is_empty() && cache_dir == build_dir {
        let manifest = preload::manifest_path(&build_dir, &config.app.name);
        if manifest.exists() {
            preload::append(&manifest, &preload_names).await?;
            ui::step_ok(
                &ctx,
                &format!(
                    "Appended {} preload symbol(s) to {}",
                    preload_names.len(),
                    manifest.display()
                ),
            );
        } else {
            debug!(
                "Preload manifest {} not found, skipping",
                manifest.display()
            );
        }
    }

    ui::outro_success(
        &ctx,
        &format!(
            "Cache for the \"{}\" environment was successfully warmed.",
            config.general.environment
        ),
    );

    Ok(())
}

fn create_progress_bar(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
