//! Session use cases.
//!
//! The persisted session is two facts: the onboarding flag and the resident
//! profile. Each use case touches one of them; [`SessionBootstrapper`] ties
//! them together and tracks the resulting [`mr_core::AppState`].

mod bootstrapper;
mod complete_auth;
mod complete_onboarding;
mod logout;
mod resolve;

pub use bootstrapper::SessionBootstrapper;
pub use complete_auth::CompleteAuth;
pub use complete_onboarding::CompleteOnboarding;
pub use logout::Logout;
pub use resolve::{ResolveInitialState, SessionSnapshot};

use mr_core::profile::ProfileError;
use mr_core::session::AppState;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("profile is incomplete: {0}")]
    IncompleteProfile(#[from] ProfileError),
    #[error("session storage failed: {0}")]
    Storage(#[from] anyhow::Error),
    #[error("not signed in (session state: {0:?})")]
    NotSignedIn(Option<AppState>),
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mr_core::ports::{SessionStoreError, SessionStorePort};
    use mr_core::profile::{ProfileError, ResidentStatus, UserProfile};

    pub fn sample_profile() -> UserProfile {
        UserProfile {
            phone: "9991234567".into(),
            apartment: "45".into(),
            entrance: "1".into(),
            status: ResidentStatus::Owner,
            complex: "ЖК Сомон".into(),
        }
    }

    #[derive(Default)]
    pub struct StoredSession {
        pub flag: bool,
        pub profile: Option<UserProfile>,
        pub corrupt: bool,
        pub fail_writes: bool,
        pub writes: usize,
    }

    /// In-memory session port with switchable corruption and write failures.
    #[derive(Default)]
    pub struct MockSessionStore {
        pub inner: Mutex<StoredSession>,
    }

    impl MockSessionStore {
        pub fn with(flag: bool, profile: Option<UserProfile>) -> Self {
            Self {
                inner: Mutex::new(StoredSession {
                    flag,
                    profile,
                    ..Default::default()
                }),
            }
        }

        pub fn corrupt() -> Self {
            let store = Self::with(true, None);
            store.inner.lock().unwrap().corrupt = true;
            store
        }

        pub fn failing_writes(self) -> Self {
            self.inner.lock().unwrap().fail_writes = true;
            self
        }

        pub fn flag(&self) -> bool {
            self.inner.lock().unwrap().flag
        }

        pub fn profile(&self) -> Option<UserProfile> {
            self.inner.lock().unwrap().profile.clone()
        }

        pub fn writes(&self) -> usize {
            self.inner.lock().unwrap().writes
        }
    }

    #[async_trait]
    impl SessionStorePort for MockSessionStore {
        async fn has_seen_onboarding(&self) -> anyhow::Result<bool> {
            Ok(self.inner.lock().unwrap().flag)
        }

        async fn mark_onboarding_seen(&self) -> anyhow::Result<()> {
            let mut inner = self.inner.lock().unwrap();
            if inner.fail_writes {
                anyhow::bail!("disk full");
            }
            if !inner.flag {
                inner.flag = true;
                inner.writes += 1;
            }
            Ok(())
        }

        async fn load_profile(&self) -> Result<Option<UserProfile>, SessionStoreError> {
            let inner = self.inner.lock().unwrap();
            if inner.corrupt {
                return Err(SessionStoreError::CorruptProfile(ProfileError::Malformed(
                    "expected value".into(),
                )));
            }
            Ok(inner.profile.clone())
        }

        async fn save_profile(&self, profile: &UserProfile) -> anyhow::Result<()> {
            let mut inner = self.inner.lock().unwrap();
            if inner.fail_writes {
                anyhow::bail!("disk full");
            }
            inner.profile = Some(profile.clone());
            inner.corrupt = false;
            inner.writes += 1;
            Ok(())
        }

        async fn clear_profile(&self) -> anyhow::Result<()> {
            let mut inner = self.inner.lock().unwrap();
            if inner.fail_writes {
                anyhow::bail!("disk full");
            }
            inner.profile = None;
            inner.corrupt = false;
            inner.writes += 1;
            Ok(())
        }
    }
}
