//! Onboarding carousel commands

use tracing::{info_span, Instrument};

use super::wrong_mode;
use crate::bootstrap::runtime::ModeController;
use crate::bootstrap::{AppRuntime, SessionView};
use crate::commands::session::current_view;

pub async fn next_slide(runtime: &AppRuntime) -> Result<SessionView, String> {
    advance(runtime, false)
        .instrument(info_span!("command.onboarding.next"))
        .await
}

pub async fn skip_onboarding(runtime: &AppRuntime) -> Result<SessionView, String> {
    advance(runtime, true)
        .instrument(info_span!("command.onboarding.skip"))
        .await
}

async fn advance(runtime: &AppRuntime, skip: bool) -> Result<SessionView, String> {
    let mut mode = runtime.mode.lock().await;
    let ModeController::Onboarding(flow) = &mut *mode else {
        return Err(wrong_mode("onboarding"));
    };
    let step = if skip { flow.skip().await } else { flow.next().await };
    step.map_err(|e| e.to_string())?;
    runtime.sync_mode(&mut mode).await;
    drop(mode);
    current_view(runtime).await
}
