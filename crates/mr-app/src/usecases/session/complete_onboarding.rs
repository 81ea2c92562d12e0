use std::sync::Arc;

use mr_core::ports::SessionStorePort;

/// Use case for completing onboarding.
///
/// Sets the onboarding flag. The flag is never cleared afterwards.
pub struct CompleteOnboarding {
    session_store: Arc<dyn SessionStorePort>,
}

impl CompleteOnboarding {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    /// Convenience constructor for the use case accessor pattern.
    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.session_store.mark_onboarding_seen().await
    }
}
