//! Signup flow orchestrator.
//!
//! Drives [`AuthStateMachine`] and executes the actions it returns:
//! notifications go to the [`NotificationPort`], a completed profile goes to
//! the [`SessionBootstrapper`].

use std::sync::Arc;

use mr_core::auth::{ApartmentForm, AuthAction, AuthEvent, AuthState, AuthStateMachine};
use mr_core::notification::{messages, Notification};
use mr_core::ports::NotificationPort;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::usecases::session::{SessionBootstrapper, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error("complete auth failed: {0}")]
    CompleteAuth(#[from] SessionError),
}

pub struct AuthFlow {
    state: Mutex<AuthState>,
    /// Serializes transition + action execution.
    dispatch_lock: Mutex<()>,
    notifier: Arc<dyn NotificationPort>,
    session: Arc<SessionBootstrapper>,
}

impl AuthFlow {
    pub fn new(notifier: Arc<dyn NotificationPort>, session: Arc<SessionBootstrapper>) -> Self {
        Self {
            state: Mutex::new(AuthState::default()),
            dispatch_lock: Mutex::new(()),
            notifier,
            session,
        }
    }

    pub async fn submit_phone(&self, phone: impl Into<String>) -> Result<AuthState, AuthFlowError> {
        self.dispatch(AuthEvent::SubmitPhone {
            phone: phone.into(),
        })
        .await
    }

    pub async fn submit_code(&self, code: impl Into<String>) -> Result<AuthState, AuthFlowError> {
        self.dispatch(AuthEvent::SubmitCode { code: code.into() })
            .await
    }

    pub async fn change_number(&self) -> Result<AuthState, AuthFlowError> {
        self.dispatch(AuthEvent::ChangeNumber).await
    }

    pub async fn submit_apartment(&self, form: ApartmentForm) -> Result<AuthState, AuthFlowError> {
        self.dispatch(AuthEvent::SubmitApartment(form)).await
    }

    pub async fn state(&self) -> AuthState {
        self.state.lock().await.clone()
    }

    /// Applies one event. The new state is stored before actions run, so a
    /// failed `complete_auth` leaves the apartment step ready for a retry.
    pub async fn dispatch(&self, event: AuthEvent) -> Result<AuthState, AuthFlowError> {
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!("usecase.auth_flow.dispatch", event = ?event);
        async {
            let current = self.state.lock().await.clone();
            let from = current.step;
            let (next, actions) = AuthStateMachine::transition(current, event);
            info!(from = ?from, to = ?next.step, error = ?next.error, "auth state transition");

            *self.state.lock().await = next.clone();
            self.execute_actions(actions).await?;
            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<AuthAction>) -> Result<(), AuthFlowError> {
        for action in actions {
            debug!(?action, "auth executing action");
            match action {
                AuthAction::Notify(notification) => self.notify(notification).await,
                AuthAction::CompleteAuth { profile } => {
                    self.session.complete_auth(profile).await?;
                    self.notify(Notification::success(messages::WELCOME)).await;
                }
            }
        }
        Ok(())
    }

    async fn notify(&self, notification: Notification) {
        if let Err(err) = self.notifier.notify(notification).await {
            warn!(error = %err, "failed to display notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::session::test_support::MockSessionStore;
    use mr_core::auth::AuthStep;
    use mr_core::profile::ResidentStatus;
    use mr_core::session::AppState;
    use mr_core::ValidationError;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: std::sync::Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|n| n.message.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl NotificationPort for RecordingNotifier {
        async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
            self.seen.lock().unwrap().push(notification);
            Ok(())
        }
    }

    struct Fixture {
        flow: AuthFlow,
        notifier: Arc<RecordingNotifier>,
        store: Arc<MockSessionStore>,
        session: Arc<SessionBootstrapper>,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MockSessionStore::with(true, None));
        let session = Arc::new(SessionBootstrapper::new(store.clone()));
        session.resolve_initial_state().await.unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        Fixture {
            flow: AuthFlow::new(notifier.clone(), session.clone()),
            notifier,
            store,
            session,
        }
    }

    fn form() -> ApartmentForm {
        ApartmentForm {
            apartment: "45".into(),
            entrance: "1".into(),
            complex: "ЖК Сомон".into(),
            status: ResidentStatus::default(),
        }
    }

    #[tokio::test]
    async fn short_phone_notifies_and_stays() {
        let f = fixture().await;

        let state = f.flow.submit_phone("12345").await.unwrap();

        assert_eq!(state.step, AuthStep::Phone);
        assert_eq!(
            state.error,
            Some(ValidationError::PhoneTooShort { min_len: 10 })
        );
        assert_eq!(f.notifier.messages(), vec![messages::INVALID_PHONE]);
    }

    #[tokio::test]
    async fn full_signup_enters_main() {
        let f = fixture().await;

        f.flow.submit_phone("9991234567").await.unwrap();
        f.flow.submit_code("1234").await.unwrap();
        let state = f.flow.submit_apartment(form()).await.unwrap();

        assert_eq!(state.step, AuthStep::Apartment);
        assert_eq!(f.session.current_state().await, Some(AppState::Main));
        let profile = f.store.profile().unwrap();
        assert_eq!(profile.phone, "9991234567");
        assert_eq!(profile.status, ResidentStatus::Owner);
        assert_eq!(
            f.notifier.messages(),
            vec![messages::CODE_SENT, messages::WELCOME]
        );
    }

    #[tokio::test]
    async fn blank_apartment_is_a_validation_failure() {
        let f = fixture().await;
        f.flow.submit_phone("9991234567").await.unwrap();
        f.flow.submit_code("1234").await.unwrap();

        let state = f
            .flow
            .submit_apartment(ApartmentForm {
                apartment: "   ".into(),
                ..form()
            })
            .await
            .unwrap();

        assert_eq!(state.step, AuthStep::Apartment);
        assert_eq!(state.error, Some(ValidationError::MissingApartmentFields));
        assert_eq!(
            f.notifier.messages(),
            vec![messages::CODE_SENT, messages::MISSING_FIELDS]
        );
        assert_eq!(f.session.current_state().await, Some(AppState::Auth));
        assert_eq!(f.store.profile(), None);
    }

    #[tokio::test]
    async fn change_number_returns_to_phone_keeping_input() {
        let f = fixture().await;
        f.flow.submit_phone("9991234567").await.unwrap();

        let state = f.flow.change_number().await.unwrap();

        assert_eq!(state.step, AuthStep::Phone);
        assert_eq!(state.phone, "9991234567");
        assert_eq!(f.flow.state().await, state);
    }

    #[tokio::test]
    async fn out_of_order_event_is_a_noop() {
        let f = fixture().await;

        let state = f.flow.submit_code("1234").await.unwrap();

        assert_eq!(state, AuthState::default());
        assert!(f.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn failed_persist_keeps_apartment_step_for_retry() {
        let f = fixture().await;
        f.flow.submit_phone("9991234567").await.unwrap();
        f.flow.submit_code("1234").await.unwrap();
        f.store.inner.lock().unwrap().fail_writes = true;

        let result = f.flow.submit_apartment(form()).await;

        assert!(matches!(result, Err(AuthFlowError::CompleteAuth(_))));
        assert_eq!(f.flow.state().await.step, AuthStep::Apartment);
        assert_eq!(f.session.current_state().await, Some(AppState::Auth));
        assert!(!f.notifier.messages().contains(&messages::WELCOME.to_string()));

        f.store.inner.lock().unwrap().fail_writes = false;
        f.flow.submit_apartment(form()).await.unwrap();
        assert_eq!(f.session.current_state().await, Some(AppState::Main));
    }
}
