use std::sync::Arc;

use mr_core::ports::{SessionStoreError, SessionStorePort};
use mr_core::profile::UserProfile;
use mr_core::session::AppState;
use tracing::warn;

/// Resolved session: the app mode plus the profile backing `Main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: AppState,
    pub profile: Option<UserProfile>,
}

impl SessionSnapshot {
    pub fn auth() -> Self {
        Self {
            state: AppState::Auth,
            profile: None,
        }
    }

    pub fn main(profile: UserProfile) -> Self {
        Self {
            state: AppState::Main,
            profile: Some(profile),
        }
    }
}

/// Use case for deriving the startup mode from persisted storage.
pub struct ResolveInitialState {
    session_store: Arc<dyn SessionStorePort>,
}

impl ResolveInitialState {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    /// A corrupt stored profile is treated as absent and left in place.
    pub async fn execute(&self) -> anyhow::Result<SessionSnapshot> {
        let has_seen_onboarding = self.session_store.has_seen_onboarding().await?;

        let profile = match self.session_store.load_profile().await {
            Ok(profile) => profile,
            Err(SessionStoreError::CorruptProfile(err)) => {
                warn!(error = %err, "stored profile is corrupt, ignoring it");
                None
            }
            Err(SessionStoreError::Storage(err)) => return Err(err),
        };

        let state = AppState::resolve(has_seen_onboarding, profile.is_some());
        let profile = match state {
            AppState::Main => profile,
            _ => None,
        };
        Ok(SessionSnapshot { state, profile })
    }
}
