//! Key-value persistence port
//!
//! This port abstracts the local key-value store holding session data.
//! Implementations are provided by the infrastructure layer (a JSON file in
//! production, an in-memory map in tests).

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}
