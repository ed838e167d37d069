//! Tests for file and environment layering.

use std::fs;

use figment::Jail;
use modgraph_config::{CONFIG_FILE_NAME, ModgraphConfig};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let config = ModgraphConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config, ModgraphConfig::default());
        Ok(())
    });
}

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            CONFIG_FILE_NAME,
            r#"
[cycles]
max_number_to_detect = 12

[logging]
level = "debug"
"#,
        )?;

        let config = ModgraphConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.cycles.max_number_to_detect, 12);
        assert_eq!(config.logging.level, "debug");
        assert!(config.aggregation.parallel);
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(CONFIG_FILE_NAME, "[cycles]\nmax_number_to_detect = 12")?;
        jail.set_env("MODGRAPH_CYCLES__MAX_NUMBER_TO_DETECT", "3");
        jail.set_env("MODGRAPH_AGGREGATION__PARALLEL", "false");

        let config = ModgraphConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.cycles.max_number_to_detect, 3);
        assert!(!config.aggregation.parallel);
        Ok(())
    });
}

#[test]
fn invalid_environment_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("MODGRAPH_CYCLES__MAX_NUMBER_TO_DETECT", "0");

        let err = ModgraphConfig::load().unwrap_err();
        assert!(err.to_string().contains("cycles.max_number_to_detect"));
        Ok(())
    });
}

#[test]
fn loads_explicit_path() {
    Jail::expect_with(|_jail| {
        let dir = TempDir::new().map_err(|e| e.to_string())?;
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[aggregation]\nparallel_threshold = 8\n").map_err(|e| e.to_string())?;

        let config = ModgraphConfig::load_from(&path).map_err(|e| e.to_string())?;
        assert_eq!(config.aggregation.parallel_threshold, 8);
        Ok(())
    });
}
