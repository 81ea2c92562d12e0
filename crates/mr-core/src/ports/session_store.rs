//! Session persistence port
//!
//! Typed view over the two session keys: the onboarding flag and the
//! resident profile.

use async_trait::async_trait;

use crate::ports::errors::SessionStoreError;
use crate::profile::UserProfile;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Whether the onboarding flag is set
    async fn has_seen_onboarding(&self) -> anyhow::Result<bool>;

    /// Set the onboarding flag (idempotent)
    async fn mark_onboarding_seen(&self) -> anyhow::Result<()>;

    /// Load the stored profile.
    ///
    /// Returns `Ok(None)` when absent and `Err(CorruptProfile)` when present
    /// but unreadable.
    async fn load_profile(&self) -> Result<Option<UserProfile>, SessionStoreError>;

    /// Replace the stored profile
    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()>;

    /// Remove the stored profile
    async fn clear_profile(&self) -> anyhow::Result<()>;
}
