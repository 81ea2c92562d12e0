//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No validation logic, no default value calculation.** Missing values map
//! to empty facts; filling them in is the bootstrap layer's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the key-value store (may be empty)
    pub data_dir: PathBuf,

    /// Key-value store file name inside `data_dir` (may be empty)
    pub store_file: String,

    /// Delay before the assistant reply is delivered, in milliseconds
    pub reply_delay_ms: u64,

    /// Duration of the simulated voice capture, in milliseconds
    pub voice_capture_ms: u64,

    /// Log level directive (may be empty)
    pub log_level: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));
        let millis = |key: &str| {
            section("assistant", key)
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0)
        };

        Ok(Self {
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            store_file: section("storage", "store_file")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            reply_delay_ms: millis("reply_delay_ms"),
            voice_capture_ms: millis("voice_capture_ms"),
            log_level: section("logging", "level")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            store_file: String::new(),
            reply_delay_ms: 0,
            voice_capture_ms: 0,
            log_level: String::new(),
        }
    }

    /// Create AppConfig with system-default values for production use
    ///
    /// The base directory should be computed by the caller using
    /// platform-specific logic (e.g., the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            store_file: "storage.json".to_string(),
            reply_delay_ms: 1000,
            voice_capture_ms: 2000,
            log_level: String::new(),
        }
    }
}
