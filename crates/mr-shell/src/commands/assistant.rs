//! Assistant screen commands

use mr_core::assistant::AssistantMessage;
use tracing::{info_span, Instrument};

use super::navigation::main_shell;
use super::wrong_mode;
use crate::bootstrap::AppRuntime;

/// Returns `false` when the message was blank and nothing was sent.
pub async fn send_message(runtime: &AppRuntime, text: &str) -> Result<bool, String> {
    let span = info_span!("command.assistant.send");
    async {
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        let conversation = shell.assistant.as_ref().ok_or_else(|| wrong_mode("ai"))?;
        Ok(conversation.send(text))
    }
    .instrument(span)
    .await
}

/// Toggles the simulated voice capture. Returns whether it is now listening.
pub async fn toggle_voice_input(runtime: &AppRuntime) -> Result<bool, String> {
    let span = info_span!("command.assistant.toggle_voice");
    async {
        let mut mode = runtime.mode.lock().await;
        let shell = main_shell(&mut mode)?;
        let conversation = shell.assistant.as_ref().ok_or_else(|| wrong_mode("ai"))?;
        if conversation.is_listening() {
            conversation.stop_voice_input();
        } else {
            conversation.start_voice_input().await;
        }
        Ok(conversation.is_listening())
    }
    .instrument(span)
    .await
}

pub async fn messages(runtime: &AppRuntime) -> Result<Vec<AssistantMessage>, String> {
    let mut mode = runtime.mode.lock().await;
    let shell = main_shell(&mut mode)?;
    let conversation = shell.assistant.as_ref().ok_or_else(|| wrong_mode("ai"))?;
    Ok(conversation.messages())
}
