//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the AppConfig DTO
//! - Fill facts the file leaves empty with system defaults
//!
//! `load_config` accepts whatever is in the file. Defaults are applied only
//! in `resolve_config`, never while parsing.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mr_core::app_dirs::AppDirs;
use mr_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and zero delays are
/// accepted as facts.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Produces the effective configuration for this process.
///
/// A missing config file means system defaults. An unreadable one is
/// reported on stderr (tracing is not up yet) and also falls back.
pub fn resolve_config(dirs: &AppDirs) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(dirs.app_data_root.clone());
    let config_path = dirs.config_path();
    if !config_path.exists() {
        return defaults;
    }

    match load_config(config_path) {
        Ok(loaded) => fill_empty(loaded, &defaults),
        Err(err) => {
            eprintln!("Ignoring config file, using defaults: {err:#}");
            defaults
        }
    }
}

fn fill_empty(mut config: AppConfig, defaults: &AppConfig) -> AppConfig {
    if is_empty_path(&config.data_dir) {
        config.data_dir = defaults.data_dir.clone();
    }
    if config.store_file.is_empty() {
        config.store_file = defaults.store_file.clone();
    }
    if config.reply_delay_ms == 0 {
        config.reply_delay_ms = defaults.reply_delay_ms;
    }
    if config.voice_capture_ms == 0 {
        config.voice_capture_ms = defaults.voice_capture_ms;
    }
    config
}

fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(dir: &TempDir, content: &str) -> AppDirs {
        let dirs = AppDirs {
            app_data_root: dir.path().to_path_buf(),
        };
        std::fs::write(dirs.config_path(), content).unwrap();
        dirs
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [storage]
            data_dir = "/srv/myresidence"
            store_file = "kv.json"

            [assistant]
            reply_delay_ms = 10

            [logging]
            level = "trace"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/myresidence"));
        assert_eq!(config.store_file, "kv.json");
        assert_eq!(config.reply_delay_ms, 10);
        assert_eq!(config.voice_capture_ms, 0);
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[storage\ndata_dir = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_when_missing() {
        let err = load_config(PathBuf::from("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let dirs = AppDirs {
            app_data_root: dir.path().to_path_buf(),
        };

        let config = resolve_config(&dirs);

        assert_eq!(config, AppConfig::with_system_defaults(dir.path().to_path_buf()));
    }

    #[test]
    fn test_resolve_config_fills_only_empty_facts() {
        let dir = TempDir::new().unwrap();
        let dirs = write_config(&dir, "[assistant]\nvoice_capture_ms = 50\n");

        let config = resolve_config(&dirs);

        assert_eq!(config.data_dir, dir.path().to_path_buf());
        assert_eq!(config.store_file, "storage.json");
        assert_eq!(config.reply_delay_ms, 1000);
        assert_eq!(config.voice_capture_ms, 50);
    }

    #[test]
    fn test_resolve_config_falls_back_on_broken_file() {
        let dir = TempDir::new().unwrap();
        let dirs = write_config(&dir, "not = [valid");

        let config = resolve_config(&dirs);

        assert_eq!(config, AppConfig::with_system_defaults(dir.path().to_path_buf()));
    }
}
