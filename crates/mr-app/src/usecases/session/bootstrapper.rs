//! Session bootstrapper.
//!
//! Owns the in-memory [`AppState`] for the lifetime of the process. The state
//! is resolved from storage once and afterwards only moves through
//! `complete_onboarding`, `complete_auth` and `logout`.

use std::sync::Arc;

use mr_core::ports::SessionStorePort;
use mr_core::profile::UserProfile;
use mr_core::session::AppState;
use tokio::sync::Mutex;
use tracing::{info, info_span, Instrument};

use super::{
    CompleteAuth, CompleteOnboarding, Logout, ResolveInitialState, SessionError, SessionSnapshot,
};
use crate::deps::AppDeps;

pub struct SessionBootstrapper {
    resolve: ResolveInitialState,
    complete_onboarding: CompleteOnboarding,
    complete_auth: CompleteAuth,
    logout: Logout,
    /// `None` until the first resolve or transition.
    snapshot: Mutex<Option<SessionSnapshot>>,
}

impl SessionBootstrapper {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            resolve: ResolveInitialState::from_ports(session_store.clone()),
            complete_onboarding: CompleteOnboarding::from_ports(session_store.clone()),
            complete_auth: CompleteAuth::from_ports(session_store.clone()),
            logout: Logout::from_ports(session_store),
            snapshot: Mutex::new(None),
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        Self::new(deps.session_store.clone())
    }

    /// Resolves the startup mode. Storage is read on the first call only.
    pub async fn resolve_initial_state(&self) -> Result<AppState, SessionError> {
        let span = info_span!("usecase.session.resolve_initial_state");
        async {
            let mut snapshot = self.snapshot.lock().await;
            if let Some(current) = snapshot.as_ref() {
                return Ok(current.state);
            }

            let resolved = self.resolve.execute().await?;
            info!(state = %resolved.state, "initial session state resolved");
            let state = resolved.state;
            *snapshot = Some(resolved);
            Ok(state)
        }
        .instrument(span)
        .await
    }

    /// Sets the onboarding flag and moves `onboarding` to `auth`.
    ///
    /// Calling it again, or from `auth`/`main`, leaves the state as is.
    pub async fn complete_onboarding(&self) -> Result<AppState, SessionError> {
        let span = info_span!("usecase.session.complete_onboarding");
        async {
            let mut snapshot = self.snapshot.lock().await;
            self.complete_onboarding.execute().await?;

            match snapshot.as_ref() {
                Some(current) if current.state != AppState::Onboarding => Ok(current.state),
                _ => {
                    info!(from = ?snapshot.as_ref().map(|s| s.state), to = %AppState::Auth, "session state transition");
                    *snapshot = Some(SessionSnapshot::auth());
                    Ok(AppState::Auth)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Persists `profile` and enters `main`.
    ///
    /// An incomplete profile is rejected and the state is left untouched.
    pub async fn complete_auth(&self, profile: UserProfile) -> Result<AppState, SessionError> {
        let span = info_span!("usecase.session.complete_auth");
        async {
            let mut snapshot = self.snapshot.lock().await;
            self.complete_auth.execute(&profile).await?;

            info!(
                from = ?snapshot.as_ref().map(|s| s.state),
                to = %AppState::Main,
                complex = %profile.complex,
                "session state transition"
            );
            *snapshot = Some(SessionSnapshot::main(profile));
            Ok(AppState::Main)
        }
        .instrument(span)
        .await
    }

    /// Removes the profile and returns to `auth`. The onboarding flag stays.
    ///
    /// Only a `main` session can sign out; any other state is rejected and
    /// storage is not touched.
    pub async fn logout(&self) -> Result<AppState, SessionError> {
        let span = info_span!("usecase.session.logout");
        async {
            let mut snapshot = self.snapshot.lock().await;
            let current = snapshot.as_ref().map(|s| s.state);
            if current != Some(AppState::Main) {
                return Err(SessionError::NotSignedIn(current));
            }
            self.logout.execute().await?;

            info!(
                from = ?snapshot.as_ref().map(|s| s.state),
                to = %AppState::Auth,
                "session state transition"
            );
            *snapshot = Some(SessionSnapshot::auth());
            Ok(AppState::Auth)
        }
        .instrument(span)
        .await
    }

    /// Current mode, or `None` before the first resolve.
    pub async fn current_state(&self) -> Option<AppState> {
        self.snapshot.lock().await.as_ref().map(|s| s.state)
    }

    /// Profile backing the `main` mode.
    pub async fn current_profile(&self) -> Option<UserProfile> {
        self.snapshot
            .lock()
            .await
            .as_ref()
            .and_then(|s| s.profile.clone())
    }
}
