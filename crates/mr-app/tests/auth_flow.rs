//! Signup flow end to end, with the notifier mocked.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::{mock, predicate::eq, Sequence};
use mr_app::{AuthFlow, SessionBootstrapper};
use mr_core::auth::{ApartmentForm, AuthStep};
use mr_core::notification::{messages, Notification};
use mr_core::ports::{NotificationPort, SessionStorePort};
use mr_core::profile::ResidentStatus;
use mr_core::session::AppState;
use mr_infra::{InMemoryKeyValueStore, KeyValueSessionStore};

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationPort for Notifier {
        async fn notify(&self, notification: Notification) -> anyhow::Result<()>;
    }
}

async fn auth_session() -> (Arc<SessionBootstrapper>, Arc<dyn SessionStorePort>) {
    let kv = Arc::new(InMemoryKeyValueStore::with_entries([(
        "hasSeenOnboarding",
        "true",
    )]));
    let store: Arc<dyn SessionStorePort> = Arc::new(KeyValueSessionStore::new(kv));
    let session = Arc::new(SessionBootstrapper::new(store.clone()));
    assert_eq!(session.resolve_initial_state().await.unwrap(), AppState::Auth);
    (session, store)
}

fn form(apartment: &str) -> ApartmentForm {
    ApartmentForm {
        apartment: apartment.into(),
        entrance: "1".into(),
        complex: "ЖК Сомон".into(),
        status: ResidentStatus::default(),
    }
}

#[tokio::test]
async fn gates_and_notifications_in_order() {
    let mut notifier = MockNotifier::new();
    let mut seq = Sequence::new();
    for message in [
        messages::INVALID_PHONE,
        messages::CODE_SENT,
        messages::INVALID_CODE,
        messages::MISSING_FIELDS,
    ] {
        let expected = if message == messages::CODE_SENT {
            Notification::success(message)
        } else {
            Notification::error(message)
        };
        notifier
            .expect_notify()
            .with(eq(expected))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
    }
    notifier
        .expect_notify()
        .with(eq(Notification::success(messages::WELCOME)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let (session, store) = auth_session().await;
    let flow = AuthFlow::new(Arc::new(notifier), session.clone());

    assert_eq!(flow.submit_phone("12345").await.unwrap().step, AuthStep::Phone);
    assert_eq!(
        flow.submit_phone("9991234567").await.unwrap().step,
        AuthStep::Code
    );
    assert_eq!(flow.submit_code("123").await.unwrap().step, AuthStep::Code);
    assert_eq!(
        flow.submit_code("1234").await.unwrap().step,
        AuthStep::Apartment
    );
    assert_eq!(
        flow.submit_apartment(form("")).await.unwrap().step,
        AuthStep::Apartment
    );
    assert_eq!(session.current_state().await, Some(AppState::Auth));

    flow.submit_apartment(form("45")).await.unwrap();

    assert_eq!(session.current_state().await, Some(AppState::Main));
    let saved = store.load_profile().await.unwrap().unwrap();
    assert_eq!(saved.status, ResidentStatus::Owner);
    assert_eq!(saved.apartment, "45");
}

#[tokio::test]
async fn notifier_failure_does_not_block_signup() {
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .returning(|_| Err(anyhow::anyhow!("toast host gone")));

    let (session, _) = auth_session().await;
    let flow = AuthFlow::new(Arc::new(notifier), session.clone());

    flow.submit_phone("9991234567").await.unwrap();
    flow.submit_code("1234").await.unwrap();
    flow.submit_apartment(form("45")).await.unwrap();

    assert_eq!(session.current_state().await, Some(AppState::Main));
}
