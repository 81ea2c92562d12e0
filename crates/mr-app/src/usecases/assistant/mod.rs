//! Assistant conversation.
//!
//! Replies and simulated voice capture run as spawned tasks tied to the
//! conversation's [`CancellationToken`]. Closing or dropping the conversation
//! cancels them, so nothing is appended after the screen is gone.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use mr_core::assistant::{AssistantMessage, MessageSender, GREETING, VOICE_SAMPLE_PHRASE};
use mr_core::notification::{messages, Notification};
use mr_core::ports::{AssistantResponderPort, ClockPort, NotificationPort};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::deps::AppDeps;

/// Delays applied to deferred assistant work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantTimings {
    pub reply_delay: Duration,
    pub voice_capture: Duration,
}

impl Default for AssistantTimings {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            voice_capture: Duration::from_millis(2000),
        }
    }
}

struct Inner {
    messages: Mutex<Vec<AssistantMessage>>,
    /// Token of the pending voice capture, if any.
    listening: Mutex<Option<CancellationToken>>,
    responder: Arc<dyn AssistantResponderPort>,
    clock: Arc<dyn ClockPort>,
    timings: AssistantTimings,
    cancel: CancellationToken,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("assistant lock poisoned, recovering");
        poisoned.into_inner()
    })
}

impl Inner {
    fn push(&self, sender: MessageSender, text: impl Into<String>) {
        let message = AssistantMessage::new(sender, text, self.clock.now());
        lock(&self.messages).push(message);
    }

    /// Appends the user's message and schedules the reply.
    fn send(self: &Arc<Self>, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(MessageSender::User, text);

        let inner = Arc::clone(self);
        let question = text.to_string();
        let token = self.cancel.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("assistant reply cancelled");
                }
                _ = tokio::time::sleep(inner.timings.reply_delay) => {
                    let reply = inner.responder.respond(&question);
                    inner.push(MessageSender::Assistant, reply);
                }
            }
        });
        true
    }
}

pub struct AssistantConversation {
    inner: Arc<Inner>,
    notifier: Arc<dyn NotificationPort>,
}

impl AssistantConversation {
    /// Opens a conversation seeded with the greeting.
    pub fn new(
        responder: Arc<dyn AssistantResponderPort>,
        clock: Arc<dyn ClockPort>,
        notifier: Arc<dyn NotificationPort>,
        timings: AssistantTimings,
    ) -> Self {
        let greeting = AssistantMessage::new(MessageSender::Assistant, GREETING, clock.now());
        Self {
            inner: Arc::new(Inner {
                messages: Mutex::new(vec![greeting]),
                listening: Mutex::new(None),
                responder,
                clock,
                timings,
                cancel: CancellationToken::new(),
            }),
            notifier,
        }
    }

    pub fn from_deps(deps: &AppDeps, timings: AssistantTimings) -> Self {
        Self::new(
            deps.responder.clone(),
            deps.clock.clone(),
            deps.notifier.clone(),
            timings,
        )
    }

    /// Sends a question. Blank input is ignored and returns `false`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn send(&self, text: &str) -> bool {
        if self.is_closed() {
            return false;
        }
        self.inner.send(text)
    }

    /// Starts the simulated voice capture. No-op while already listening.
    pub async fn start_voice_input(&self) {
        if self.is_closed() {
            return;
        }
        let token = {
            let mut listening = lock(&self.inner.listening);
            if listening.is_some() {
                return;
            }
            let token = self.inner.cancel.child_token();
            *listening = Some(token.clone());
            token
        };

        if let Err(err) = self
            .notifier
            .notify(Notification::success(messages::LISTENING))
            .await
        {
            warn!(error = %err, "failed to display notification");
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("voice capture cancelled");
                }
                _ = tokio::time::sleep(inner.timings.voice_capture) => {
                    {
                        let mut listening = lock(&inner.listening);
                        if token.is_cancelled() {
                            return;
                        }
                        listening.take();
                    }
                    inner.send(VOICE_SAMPLE_PHRASE);
                }
            }
        });
    }

    /// Stops a pending voice capture without sending anything.
    pub fn stop_voice_input(&self) {
        let mut listening = lock(&self.inner.listening);
        if let Some(token) = listening.take() {
            token.cancel();
        }
    }

    pub fn is_listening(&self) -> bool {
        lock(&self.inner.listening).is_some()
    }

    pub fn messages(&self) -> Vec<AssistantMessage> {
        lock(&self.inner.messages).clone()
    }

    /// Cancels all pending replies and voice capture.
    pub fn close(&self) {
        self.stop_voice_input();
        self.inner.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }
}

impl Drop for AssistantConversation {
    fn drop(&mut self) {
        self.inner.cancel.cancel();
    }
}
