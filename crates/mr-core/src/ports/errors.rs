use thiserror::Error;

use crate::profile::ProfileError;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The stored profile exists but cannot be parsed.
    #[error("stored profile is corrupt: {0}")]
    CorruptProfile(#[source] ProfileError),

    #[error("session storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
