//! Startup resolution against the real file-backed store.

use std::sync::Arc;

use mr_app::SessionBootstrapper;
use mr_core::ports::{KeyValueStorePort, SessionStorePort};
use mr_core::profile::{ResidentStatus, UserProfile};
use mr_core::session::{keys, AppState};
use mr_infra::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueSessionStore};
use tempfile::TempDir;

fn profile() -> UserProfile {
    UserProfile {
        phone: "9991234567".into(),
        apartment: "45".into(),
        entrance: "1".into(),
        status: ResidentStatus::Tenant,
        complex: "ЖК Душанбе Сити".into(),
    }
}

fn file_store(dir: &TempDir) -> Arc<FileKeyValueStore> {
    Arc::new(FileKeyValueStore::with_defaults(dir.path().to_path_buf()))
}

/// A fresh bootstrapper over `kv`, as on a new process start.
fn restart(kv: Arc<dyn KeyValueStorePort>) -> SessionBootstrapper {
    let session_store: Arc<dyn SessionStorePort> = Arc::new(KeyValueSessionStore::new(kv));
    SessionBootstrapper::new(session_store)
}

#[tokio::test]
async fn resolve_truth_table() {
    let cases = [
        (None, None, AppState::Onboarding),
        (None, Some(profile()), AppState::Onboarding),
        (Some("true"), None, AppState::Auth),
        (Some("true"), Some(profile()), AppState::Main),
    ];

    for (flag, stored, expected) in cases {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        if let Some(flag) = flag {
            kv.set(keys::HAS_SEEN_ONBOARDING, flag).await.unwrap();
        }
        if let Some(p) = &stored {
            kv.set(keys::USER_DATA, &p.to_json().unwrap()).await.unwrap();
        }

        let state = restart(kv).resolve_initial_state().await.unwrap();
        assert_eq!(state, expected, "flag={flag:?} profile={}", stored.is_some());
    }
}

#[tokio::test]
async fn complete_auth_survives_restart() {
    let dir = TempDir::new().unwrap();

    let first = restart(file_store(&dir));
    assert_eq!(
        first.resolve_initial_state().await.unwrap(),
        AppState::Onboarding
    );
    first.complete_onboarding().await.unwrap();
    first.complete_auth(profile()).await.unwrap();

    let second = restart(file_store(&dir));
    assert_eq!(second.resolve_initial_state().await.unwrap(), AppState::Main);
    assert_eq!(second.current_profile().await, Some(profile()));
}

#[tokio::test]
async fn logout_then_restart_is_auth() {
    let dir = TempDir::new().unwrap();

    let first = restart(file_store(&dir));
    first.resolve_initial_state().await.unwrap();
    first.complete_onboarding().await.unwrap();
    first.complete_auth(profile()).await.unwrap();
    first.logout().await.unwrap();

    let second = restart(file_store(&dir));
    assert_eq!(second.resolve_initial_state().await.unwrap(), AppState::Auth);
}

#[tokio::test]
async fn complete_onboarding_twice_equals_once() {
    let dir = TempDir::new().unwrap();
    let kv = file_store(&dir);

    let session = restart(kv.clone());
    session.resolve_initial_state().await.unwrap();
    session.complete_onboarding().await.unwrap();
    let once = std::fs::read_to_string(kv.path()).unwrap();

    session.complete_onboarding().await.unwrap();
    let twice = std::fs::read_to_string(kv.path()).unwrap();

    assert_eq!(once, twice);
    assert_eq!(session.current_state().await, Some(AppState::Auth));
}

#[tokio::test]
async fn corrupt_user_data_resolves_to_auth_and_is_kept() {
    let kv = Arc::new(InMemoryKeyValueStore::with_entries([
        (keys::HAS_SEEN_ONBOARDING, "true"),
        (keys::USER_DATA, r#"{"phone":"9991234567","status":"landlord"}"#),
    ]));

    let session = restart(kv.clone());

    assert_eq!(session.resolve_initial_state().await.unwrap(), AppState::Auth);
    assert!(kv.get(keys::USER_DATA).await.unwrap().is_some());
}

#[tokio::test]
async fn flag_is_written_as_literal_true() {
    let dir = TempDir::new().unwrap();
    let kv = file_store(&dir);

    let session = restart(kv.clone());
    session.resolve_initial_state().await.unwrap();
    session.complete_onboarding().await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(kv.path()).unwrap()).unwrap();
    assert_eq!(raw[keys::HAS_SEEN_ONBOARDING], "true");
}

#[tokio::test]
async fn truncated_store_file_resolves_to_onboarding() {
    let dir = TempDir::new().unwrap();
    let kv = file_store(&dir);
    std::fs::write(kv.path(), r#"{"hasSeenOnboarding":"true","userD"#).unwrap();

    let session = restart(kv.clone());

    assert_eq!(
        session.resolve_initial_state().await.unwrap(),
        AppState::Onboarding
    );
    session.complete_onboarding().await.unwrap();
    assert_eq!(restart(kv).resolve_initial_state().await.unwrap(), AppState::Auth);
}
