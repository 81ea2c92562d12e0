use std::sync::Arc;

use mr_core::ports::SessionStorePort;
use mr_core::profile::UserProfile;

use super::SessionError;

/// Use case for finishing signup: persists the resident profile.
pub struct CompleteAuth {
    session_store: Arc<dyn SessionStorePort>,
}

impl CompleteAuth {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    /// Rejects incomplete profiles before touching storage.
    ///
    /// The onboarding flag is ensured first so a stored profile always
    /// implies the flag.
    pub async fn execute(&self, profile: &UserProfile) -> Result<(), SessionError> {
        profile.validate()?;
        self.session_store.mark_onboarding_seen().await?;
        self.session_store.save_profile(profile).await?;
        Ok(())
    }
}
