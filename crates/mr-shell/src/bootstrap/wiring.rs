//! # Dependency Wiring
//!
//! Turns an [`AppConfig`] into [`AppDeps`]: builds the infrastructure
//! adapters and wraps each in `Arc<dyn Port>`. This is the only place that
//! names concrete adapter types.

use std::sync::Arc;

use mr_app::AppDeps;
use mr_core::assistant::KeywordAssistantResponder;
use mr_core::config::AppConfig;
use mr_core::ports::*;
use mr_infra::kv::DEFAULT_STORE_FILE;
use mr_infra::{FileKeyValueStore, KeyValueSessionStore, SystemClock, TracingNotifier};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Storage initialization failed: {0}")]
    StorageInit(String),

    #[error("App directory resolution failed: {0}")]
    AppDirs(#[from] AppDirsError),
}

fn create_key_value_store(config: &AppConfig) -> WiringResult<Arc<dyn KeyValueStorePort>> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(WiringError::StorageInit("data_dir is empty".to_string()));
    }
    std::fs::create_dir_all(&config.data_dir).map_err(|e| {
        WiringError::StorageInit(format!(
            "Failed to create data directory {}: {}",
            config.data_dir.display(),
            e
        ))
    })?;

    let store_file = if config.store_file.is_empty() {
        DEFAULT_STORE_FILE
    } else {
        config.store_file.as_str()
    };
    Ok(Arc::new(FileKeyValueStore::new(config.data_dir.join(store_file))))
}

/// Wire all dependencies together
///
/// 1. Create the file-backed key-value store under `data_dir`
/// 2. Layer the typed session store over it
/// 3. Construct `AppDeps` with the notifier, responder and clock
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let kv = create_key_value_store(config)?;
    let session_store: Arc<dyn SessionStorePort> = Arc::new(KeyValueSessionStore::new(kv));

    let deps = AppDeps {
        // Session dependencies
        session_store,

        // UI dependencies
        notifier: Arc::new(TracingNotifier::new()),

        // Assistant dependencies
        responder: Arc::new(KeywordAssistantResponder::new()),

        // System dependencies
        clock: Arc::new(SystemClock),
    };

    Ok(deps)
}
