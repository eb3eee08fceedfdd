//! Integration tests for Prewarm

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn prewarm() -> Command {
        cargo_bin_cmd!("prewarm")
    }

    /// A project directory with a prewarm.toml and warmable fixtures
    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();

        std::fs::write(
            temp.path().join("prewarm.toml"),
            r#"
[general]
environment = "test"

[app]
name = "demo"
"#,
        )
        .unwrap();

        let config_dir = temp.path().join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("app.toml"),
            "name = \"demo\"\npreload = [\"App\\\\Kernel\"]\n",
        )
        .unwrap();
        std::fs::write(
            config_dir.join("routes.toml"),
            r#"
[[route]]
name = "home"
path = "/"
controller = "App\\Controller\\Home"

[[route]]
name = "user"
path = "/user/{id}"
controller = "App\\Controller\\User"
"#,
        )
        .unwrap();
        std::fs::write(
            config_dir.join("services.toml"),
            r#"
[[service]]
id = "mailer"
class = "App\\Mailer"
deps = ["logger"]

[[service]]
id = "logger"
class = "App\\Logger"
"#,
        )
        .unwrap();

        let templates = temp.path().join("templates");
        std::fs::create_dir_all(&templates).unwrap();
        std::fs::write(templates.join("base.html"), "<html></html>").unwrap();

        temp
    }

    #[test]
    fn help_displays() {
        prewarm()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache Warmup Orchestrator"));
    }

    #[test]
    fn version_displays() {
        prewarm()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("prewarm"));
    }

    #[test]
    fn warmup_full_pass() {
        let temp = project();

        prewarm()
            .arg("warmup")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("successfully warmed"));

        let cache_dir = temp.path().join("var").join("cache").join("test");
        assert!(cache_dir.join("config.json").exists());
        assert!(cache_dir.join("routes.json").exists());
        assert!(cache_dir.join("services.json").exists());
        assert!(cache_dir.join("templates.json").exists());
    }

    #[test]
    fn warmup_no_optional_skips_templates() {
        let temp = project();

        prewarm()
            .args(["warmup", "--no-optional-warmers"])
            .current_dir(temp.path())
            .assert()
            .success();

        let cache_dir = temp.path().join("var").join("cache").join("test");
        assert!(cache_dir.join("routes.json").exists());
        assert!(!cache_dir.join("templates.json").exists());
    }

    #[test]
    fn warmup_selective() {
        let temp = project();

        prewarm()
            .args(["warmup", "routes"])
            .current_dir(temp.path())
            .assert()
            .success();

        let cache_dir = temp.path().join("var").join("cache").join("test");
        assert!(cache_dir.join("routes.json").exists());
        assert!(!cache_dir.join("config.json").exists());
    }

    #[test]
    fn warmup_unknown_warmer_fails() {
        let temp = project();

        prewarm()
            .args(["warmup", "missing"])
            .current_dir(temp.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn warmup_appends_preload_to_existing_manifest() {
        let temp = project();

        let cache_dir = temp.path().join("var").join("cache").join("test");
        std::fs::create_dir_all(&cache_dir).unwrap();
        let manifest = cache_dir.join("demo.preload");
        std::fs::write(&manifest, "Build\\Bootstrap\n").unwrap();

        prewarm()
            .arg("warmup")
            .current_dir(temp.path())
            .assert()
            .success();

        let content = std::fs::read_to_string(&manifest).unwrap();
        // existing entries first, then warmer contributions in
        // execution order: config symbols, route controllers
        // (static route first), service classes dependency-first
        assert_eq!(
            content,
            "Build\\Bootstrap\nApp\\Kernel\nApp\\Controller\\Home\nApp\\Controller\\User\nApp\\Logger\nApp\\Mailer\n"
        );
    }

    #[test]
    fn warmup_without_manifest_skips_preload() {
        let temp = project();

        prewarm()
            .arg("warmup")
            .current_dir(temp.path())
            .assert()
            .success();

        let manifest = temp
            .path()
            .join("var")
            .join("cache")
            .join("test")
            .join("demo.preload");
        assert!(!manifest.exists());
    }

    #[test]
    fn warmup_fails_on_invalid_routes() {
        let temp = project();
        std::fs::write(
            temp.path().join("config").join("routes.toml"),
            r#"
[[route]]
name = "dup"
path = "/"
controller = "A"

[[route]]
name = "dup"
path = "/other"
controller = "B"
"#,
        )
        .unwrap();

        prewarm()
            .arg("warmup")
            .current_dir(temp.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("routes"));
    }

    #[test]
    fn list_shows_registered_warmers() {
        let temp = project();

        prewarm()
            .arg("list")
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(
                predicate::str::contains("config")
                    .and(predicate::str::contains("routes"))
                    .and(predicate::str::contains("services"))
                    .and(predicate::str::contains("templates")),
            );
    }

    #[test]
    fn list_json_format() {
        let temp = project();

        let output = prewarm()
            .args(["list", "--format", "json"])
            .current_dir(temp.path())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let names: Vec<&str> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["config", "routes", "services", "templates"]);
    }

    #[test]
    fn list_plain_format() {
        let temp = project();

        prewarm()
            .args(["list", "--format", "plain"])
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("routes\n"));
    }

    #[test]
    fn init_creates_config() {
        let temp = TempDir::new().unwrap();

        prewarm()
            .arg("init")
            .current_dir(temp.path())
            .assert()
            .success();

        assert!(temp.path().join("prewarm.toml").exists());
    }

    #[test]
    fn init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("prewarm.toml"), "existing").unwrap();

        prewarm()
            .arg("init")
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().unwrap();

        prewarm()
            .args(["--config", "/nonexistent/config.toml", "warmup"])
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }
}
