//! Session commands

use tracing::{info_span, Instrument};

use super::navigation::main_shell;
use super::wrong_mode;
use crate::bootstrap::runtime::{MainShell, ModeController};
use crate::bootstrap::{AppRuntime, SessionView};

/// Resolve the startup mode and open its controller.
pub async fn resolve_initial_state(runtime: &AppRuntime) -> Result<SessionView, String> {
    let span = info_span!("command.session.resolve_initial_state");
    async {
        let mut mode = runtime.mode.lock().await;
        runtime
            .session()
            .resolve_initial_state()
            .await
            .map_err(|e| e.to_string())?;
        runtime.sync_mode(&mut mode).await;
        drop(mode);
        current_view(runtime).await
    }
    .instrument(span)
    .await
}

/// Sign out from a screen that offers it and return to the auth flow.
///
/// A failed sign-out keeps the main shell on the screen it was on.
pub async fn logout(runtime: &AppRuntime) -> Result<SessionView, String> {
    let span = info_span!("command.session.logout");
    async {
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        let context = shell.navigator.screen_context();
        if !context.can_logout {
            return Err(format!("logout is not offered on {}", context.screen));
        }

        let ModeController::Main(shell) = std::mem::take(&mut *mode) else {
            return Err(wrong_mode("main"));
        };
        let MainShell {
            navigator,
            assistant,
            requests,
        } = *shell;
        if let Err((navigator, err)) = navigator.logout().await {
            *mode = ModeController::Main(Box::new(MainShell {
                navigator,
                assistant,
                requests,
            }));
            return Err(err.to_string());
        }

        runtime.sync_mode(&mut mode).await;
        drop(mode);
        current_view(runtime).await
    }
    .instrument(span)
    .await
}

pub async fn current_view(runtime: &AppRuntime) -> Result<SessionView, String> {
    runtime
        .view()
        .await
        .ok_or_else(|| "session not resolved".to_string())
}
