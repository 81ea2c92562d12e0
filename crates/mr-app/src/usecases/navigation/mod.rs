//! Main-shell navigation.
//!
//! A [`ScreenNavigator`] exists only while the session is in `main`. It is
//! created with the profile snapshot taken at entry and consumed by
//! [`ScreenNavigator::logout`], so a fresh one always starts on `home`.

use std::sync::Arc;

use mr_core::navigation::{Navigator, Screen};
use mr_core::profile::UserProfile;
use mr_core::session::AppState;
use tracing::info;

use crate::usecases::session::{SessionBootstrapper, SessionError};

/// What the active screen is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext<'a> {
    pub screen: Screen,
    /// Present for screens that display the resident profile.
    pub profile: Option<&'a UserProfile>,
    pub can_go_back: bool,
    pub can_logout: bool,
}

pub struct ScreenNavigator {
    navigator: Navigator,
    profile: Option<UserProfile>,
    session: Arc<SessionBootstrapper>,
}

impl ScreenNavigator {
    /// Opens the main shell on `home` with the session's current profile.
    pub async fn open(session: Arc<SessionBootstrapper>) -> Self {
        let profile = session.current_profile().await;
        Self {
            navigator: Navigator::new(),
            profile,
            session,
        }
    }

    pub fn current(&self) -> Screen {
        self.navigator.current()
    }

    pub fn navigate_to(&mut self, screen: Screen) -> Screen {
        let from = self.navigator.navigate_to(screen);
        info!(from = %from, to = %screen, "navigate");
        screen
    }

    /// Back from any screen lands on `home`.
    pub fn back(&mut self) -> Screen {
        let from = self.navigator.back();
        info!(from = %from, to = %Screen::Home, "navigate back");
        Screen::Home
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn screen_context(&self) -> ScreenContext<'_> {
        let screen = self.current();
        ScreenContext {
            screen,
            profile: if screen.needs_profile() {
                self.profile.as_ref()
            } else {
                None
            },
            can_go_back: !screen.is_home(),
            can_logout: screen.offers_logout(),
        }
    }

    /// Signs out. On failure the navigator is handed back unchanged.
    pub async fn logout(self) -> Result<AppState, (Self, SessionError)> {
        match self.session.logout().await {
            Ok(state) => Ok(state),
            Err(err) => Err((self, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::session::test_support::{sample_profile, MockSessionStore};

    async fn open_main() -> (ScreenNavigator, Arc<MockSessionStore>) {
        let store = Arc::new(MockSessionStore::with(true, Some(sample_profile())));
        let session = Arc::new(SessionBootstrapper::new(store.clone()));
        session.resolve_initial_state().await.unwrap();
        (ScreenNavigator::open(session).await, store)
    }

    #[tokio::test]
    async fn payments_then_back_is_home() {
        let (mut nav, _) = open_main().await;
        assert_eq!(nav.current(), Screen::Home);

        nav.navigate_to(Screen::Payments);
        assert_eq!(nav.current(), Screen::Payments);

        assert_eq!(nav.back(), Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
    }

    #[tokio::test]
    async fn context_exposes_profile_only_where_needed() {
        let (mut nav, _) = open_main().await;

        nav.navigate_to(Screen::Apartment);
        let ctx = nav.screen_context();
        assert_eq!(ctx.profile, Some(&sample_profile()));
        assert!(ctx.can_go_back);
        assert!(!ctx.can_logout);

        nav.navigate_to(Screen::Cameras);
        assert_eq!(nav.screen_context().profile, None);

        nav.navigate_to(Screen::Profile);
        assert!(nav.screen_context().can_logout);
    }

    #[tokio::test]
    async fn home_has_no_back() {
        let (nav, _) = open_main().await;
        assert!(!nav.screen_context().can_go_back);
    }

    #[tokio::test]
    async fn logout_clears_profile_and_returns_auth() {
        let (mut nav, store) = open_main().await;
        nav.navigate_to(Screen::Profile);

        let state = nav.logout().await.map_err(|(_, e)| e).unwrap();

        assert_eq!(state, AppState::Auth);
        assert_eq!(store.profile(), None);
        assert!(store.flag());
    }

    #[tokio::test]
    async fn failed_logout_hands_navigator_back() {
        let (mut nav, store) = open_main().await;
        nav.navigate_to(Screen::Profile);
        store.inner.lock().unwrap().fail_writes = true;

        let (nav, err) = match nav.logout().await {
            Err(pair) => pair,
            Ok(_) => panic!("logout should fail"),
        };

        assert!(matches!(err, SessionError::Storage(_)));
        assert_eq!(nav.current(), Screen::Profile);
    }
}
