//! Main-shell navigation commands

use mr_core::navigation::Screen;
use mr_core::profile::UserProfile;
use tracing::{info_span, Instrument};

use super::wrong_mode;
use crate::bootstrap::runtime::{MainShell, ModeController};
use crate::bootstrap::AppRuntime;

/// Switch to the screen with the given lowercase id (`"payments"`).
pub async fn navigate(runtime: &AppRuntime, screen_id: &str) -> Result<Screen, String> {
    let span = info_span!("command.navigation.navigate", screen = %screen_id);
    async {
        let screen = screen_id.parse::<Screen>().map_err(|e| e.to_string())?;
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        shell.navigator.navigate_to(screen);
        sync_assistant(runtime, shell);
        Ok(screen)
    }
    .instrument(span)
    .await
}

pub async fn back(runtime: &AppRuntime) -> Result<Screen, String> {
    let span = info_span!("command.navigation.back");
    async {
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        let screen = shell.navigator.back();
        sync_assistant(runtime, shell);
        Ok(screen)
    }
    .instrument(span)
    .await
}

pub async fn current_screen(runtime: &AppRuntime) -> Result<Screen, String> {
    let mut mode = runtime.mode.lock().await;
    Ok(main_shell(&mut mode)?.navigator.current())
}

/// Profile as shown on the active screen, if that screen displays it.
pub async fn screen_profile(runtime: &AppRuntime) -> Result<Option<UserProfile>, String> {
    let mut mode = runtime.mode.lock().await;
    let shell = main_shell(&mut mode)?;
    Ok(shell.navigator.screen_context().profile.cloned())
}

pub(crate) fn main_shell(mode: &mut ModeController) -> Result<&mut MainShell, String> {
    match mode {
        ModeController::Main(shell) => Ok(shell.as_mut()),
        _ => Err(wrong_mode("main")),
    }
}

/// The conversation lives exactly as long as the `ai` screen is active.
fn sync_assistant(runtime: &AppRuntime, shell: &mut MainShell) {
    let on_ai = shell.navigator.current() == Screen::Ai;
    match (on_ai, shell.assistant.is_some()) {
        (true, false) => shell.assistant = Some(runtime.open_assistant()),
        (false, true) => {
            if let Some(conversation) = shell.assistant.take() {
                conversation.close();
            }
        }
        _ => {}
    }
}
