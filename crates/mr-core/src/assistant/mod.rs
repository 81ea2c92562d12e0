//! Assistant chat domain models.

mod responder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use responder::KeywordAssistantResponder;

/// Greeting shown when the assistant screen opens.
pub const GREETING: &str = "Привет! Я ваш умный помощник. Могу помочь создать заявку, ответить на вопросы о доме или подсказать, что делать в различных ситуациях.";

/// Phrase produced by the simulated voice capture.
pub const VOICE_SAMPLE_PHRASE: &str = "Протекает потолок в ванной";

/// Quick questions offered under the input box.
pub const QUICK_QUESTIONS: [&str; 4] = [
    "Протекает потолок",
    "Не работает свет",
    "Как оплатить?",
    "Когда отключат воду?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: MessageSender,
    pub timestamp: DateTime<Utc>,
}

impl AssistantMessage {
    pub fn new(sender: MessageSender, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp,
        }
    }
}
