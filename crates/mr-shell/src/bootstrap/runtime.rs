//! Process-wide runtime state.
//!
//! Holds the wired dependencies, the session bootstrapper and the
//! controller of the active mode. Exactly one of the onboarding flow, the
//! auth flow or the main-shell navigator exists at a time.

use std::sync::Arc;
use std::time::Duration;

use mr_app::{
    AppDeps, AssistantConversation, AssistantTimings, AuthFlow, OnboardingFlow, RequestsBook,
    ScreenNavigator, SessionBootstrapper,
};
use mr_core::auth::AuthStep;
use mr_core::config::AppConfig;
use mr_core::navigation::Screen;
use mr_core::session::AppState;
use tokio::sync::Mutex;
use tracing::debug;

/// Snapshot of what the front end should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub state: AppState,
    pub onboarding_slide: Option<usize>,
    pub auth_step: Option<AuthStep>,
    pub screen: Option<Screen>,
}

/// Controllers of the `main` mode.
pub(crate) struct MainShell {
    pub navigator: ScreenNavigator,
    /// Alive only while the `ai` screen is active.
    pub assistant: Option<AssistantConversation>,
    pub requests: RequestsBook,
}

#[derive(Default)]
pub(crate) enum ModeController {
    #[default]
    Unresolved,
    Onboarding(OnboardingFlow),
    Auth(Arc<AuthFlow>),
    Main(Box<MainShell>),
}

pub struct AppRuntime {
    deps: AppDeps,
    session: Arc<SessionBootstrapper>,
    timings: AssistantTimings,
    pub(crate) mode: Mutex<ModeController>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: &AppConfig) -> Self {
        let session = Arc::new(SessionBootstrapper::from_deps(&deps));
        Self {
            deps,
            session,
            timings: AssistantTimings {
                reply_delay: Duration::from_millis(config.reply_delay_ms),
                voice_capture: Duration::from_millis(config.voice_capture_ms),
            },
            mode: Mutex::new(ModeController::Unresolved),
        }
    }

    pub fn deps(&self) -> &AppDeps {
        &self.deps
    }

    pub fn session(&self) -> &Arc<SessionBootstrapper> {
        &self.session
    }

    pub fn assistant_timings(&self) -> AssistantTimings {
        self.timings
    }

    /// Replaces the active controller with a fresh one for `state`.
    pub(crate) async fn enter(&self, mode: &mut ModeController, state: AppState) {
        debug!(state = %state, "entering mode");
        *mode = match state {
            AppState::Onboarding => ModeController::Onboarding(OnboardingFlow::new(
                self.session.clone(),
            )),
            AppState::Auth => ModeController::Auth(Arc::new(AuthFlow::new(
                self.deps.notifier.clone(),
                self.session.clone(),
            ))),
            AppState::Main => ModeController::Main(Box::new(MainShell {
                navigator: ScreenNavigator::open(self.session.clone()).await,
                assistant: None,
                requests: RequestsBook::from_deps(&self.deps),
            })),
        };
    }

    /// Re-enters the mode if the session state moved away from it.
    pub(crate) async fn sync_mode(&self, mode: &mut ModeController) {
        let Some(state) = self.session.current_state().await else {
            return;
        };
        let current = match mode {
            ModeController::Unresolved => None,
            ModeController::Onboarding(_) => Some(AppState::Onboarding),
            ModeController::Auth(_) => Some(AppState::Auth),
            ModeController::Main(_) => Some(AppState::Main),
        };
        if current != Some(state) {
            self.enter(mode, state).await;
        }
    }

    pub async fn view(&self) -> Option<SessionView> {
        let state = self.session.current_state().await?;
        let mode = self.mode.lock().await;
        let mut view = SessionView {
            state,
            onboarding_slide: None,
            auth_step: None,
            screen: None,
        };
        match &*mode {
            ModeController::Onboarding(flow) => view.onboarding_slide = Some(flow.index()),
            ModeController::Auth(flow) => view.auth_step = Some(flow.state().await.step),
            ModeController::Main(shell) => view.screen = Some(shell.navigator.current()),
            ModeController::Unresolved => {}
        }
        Some(view)
    }

    pub(crate) fn open_assistant(&self) -> AssistantConversation {
        AssistantConversation::from_deps(&self.deps, self.timings)
    }
}
