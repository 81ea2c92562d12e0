//! Session store over a key-value backend
//!
//! Maps the typed session port onto the two storage keys. This is the
//! persistence boundary: stored payloads are parsed into `UserProfile` here
//! and never passed upward untyped.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use mr_core::ports::{KeyValueStorePort, SessionStoreError, SessionStorePort};
use mr_core::profile::UserProfile;
use mr_core::session::{is_flag_set, keys};

pub struct KeyValueSessionStore {
    store: Arc<dyn KeyValueStorePort>,
}

impl KeyValueSessionStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionStorePort for KeyValueSessionStore {
    async fn has_seen_onboarding(&self) -> anyhow::Result<bool> {
        let raw = self.store.get(keys::HAS_SEEN_ONBOARDING).await?;
        Ok(is_flag_set(raw.as_deref()))
    }

    async fn mark_onboarding_seen(&self) -> anyhow::Result<()> {
        if self.has_seen_onboarding().await? {
            return Ok(());
        }
        self.store
            .set(keys::HAS_SEEN_ONBOARDING, keys::FLAG_SET)
            .await
            .context("persist onboarding flag failed")
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, SessionStoreError> {
        let Some(raw) = self.store.get(keys::USER_DATA).await? else {
            return Ok(None);
        };
        UserProfile::from_json(&raw)
            .map(Some)
            .map_err(SessionStoreError::CorruptProfile)
    }

    async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let json = profile.to_json().context("serialize profile failed")?;
        self.store
            .set(keys::USER_DATA, &json)
            .await
            .context("persist profile failed")
    }

    async fn clear_profile(&self) -> anyhow::Result<()> {
        self.store
            .delete(keys::USER_DATA)
            .await
            .context("delete profile failed")
    }
}
