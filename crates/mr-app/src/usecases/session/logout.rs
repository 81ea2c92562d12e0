use std::sync::Arc;

use mr_core::ports::SessionStorePort;

/// Use case for signing out. Removes the profile, keeps the onboarding flag.
pub struct Logout {
    session_store: Arc<dyn SessionStorePort>,
}

impl Logout {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub fn from_ports(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self::new(session_store)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.session_store.clear_profile().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::session::test_support::{sample_profile, MockSessionStore};

    #[tokio::test]
    async fn test_execute_clears_profile_and_keeps_flag() {
        let store = Arc::new(MockSessionStore::with(true, Some(sample_profile())));

        Logout::new(store.clone()).execute().await.unwrap();

        assert_eq!(store.profile(), None);
        assert!(store.flag());
    }
}
