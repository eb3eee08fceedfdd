//! Init command - create project-local prewarm.toml

use crate::cli::args::InitArgs;
use crate::error::{PrewarmError, PrewarmResult};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# Prewarm project configuration
# Settings here override your user config (~/.config/prewarm/config.toml)

[general]
# environment = "prod"
# debug = false

[app]
# name = "app"
# config_dir = "config"
# routes_file = "config/routes.toml"
# services_file = "config/services.toml"
# templates_dir = "templates"

[cache]
# dir = "var/cache"
# build_dir = "var/build"    # only for split build/runtime deployments

# [warmup]
# fail_fast = true
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> PrewarmResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| PrewarmError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(crate::config::LOCAL_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(PrewarmError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    ensure_dir(&target_dir).await?;

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| PrewarmError::io(format!("writing {}", config_path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Created project config",
        &config_path.display().to_string(),
    );

    Ok(())
}

async fn ensure_dir(dir: &Path) -> PrewarmResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| PrewarmError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_config() {
        let temp = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
        };
        execute(args).await.unwrap();

        let content = std::fs::read_to_string(temp.path().join("prewarm.toml")).unwrap();
        assert!(content.contains("[general]"));
        assert!(content.contains("[app]"));
        assert!(content.contains("[cache]"));
    }

    #[tokio::test]
    async fn init_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("prewarm.toml"), "existing").unwrap();

        let args = InitArgs {
            force: false,
            path: Some(temp.path().to_path_buf()),
        };
        let result = execute(args).await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("already exists"));
    }

    #[tokio::test]
    async fn init_overwrites_with_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("prewarm.toml"), "old content").unwrap();

        let args = InitArgs {
            force: true,
            path: Some(temp.path().to_path_buf()),
        };
        execute(args).await.unwrap();

        let content = std::fs::read_to_string(temp.path().join("prewarm.toml")).unwrap();
        assert!(content.contains("[general]"));
    }

    #[test]
    fn template_is_valid_toml() {
        // The template has commented-out lines; uncommented lines must parse
        let config: crate::config::Config = toml::from_str(INIT_TEMPLATE).unwrap();
        assert_eq!(config.general.environment, "prod");
    }
}
