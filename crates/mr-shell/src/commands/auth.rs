//! Signup flow commands

use std::sync::Arc;

use mr_app::AuthFlow;
use mr_core::auth::{ApartmentForm, AuthEvent};
use tracing::{info_span, Instrument};

use super::wrong_mode;
use crate::bootstrap::runtime::ModeController;
use crate::bootstrap::{AppRuntime, SessionView};
use crate::commands::session::current_view;

pub async fn submit_phone(runtime: &AppRuntime, phone: String) -> Result<SessionView, String> {
    dispatch(runtime, AuthEvent::SubmitPhone { phone })
        .instrument(info_span!("command.auth.submit_phone"))
        .await
}

pub async fn submit_code(runtime: &AppRuntime, code: String) -> Result<SessionView, String> {
    dispatch(runtime, AuthEvent::SubmitCode { code })
        .instrument(info_span!("command.auth.submit_code"))
        .await
}

pub async fn change_number(runtime: &AppRuntime) -> Result<SessionView, String> {
    dispatch(runtime, AuthEvent::ChangeNumber)
        .instrument(info_span!("command.auth.change_number"))
        .await
}

pub async fn submit_apartment(
    runtime: &AppRuntime,
    form: ApartmentForm,
) -> Result<SessionView, String> {
    dispatch(runtime, AuthEvent::SubmitApartment(form))
        .instrument(info_span!("command.auth.submit_apartment"))
        .await
}

async fn dispatch(runtime: &AppRuntime, event: AuthEvent) -> Result<SessionView, String> {
    let mut mode = runtime.mode.lock().await;
    let flow: Arc<AuthFlow> = match &*mode {
        ModeController::Auth(flow) => flow.clone(),
        _ => return Err(wrong_mode("auth")),
    };
    flow.dispatch(event).await.map_err(|e| e.to_string())?;
    runtime.sync_mode(&mut mode).await;
    drop(mode);
    current_view(runtime).await
}
