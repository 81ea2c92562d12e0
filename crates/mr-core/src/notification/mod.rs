//! User-facing notifications (transient toasts).
//!
//! Notifications are advisory: a failure to display one never changes
//! the outcome of the operation that produced it.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Fixed user-facing texts.
pub mod messages {
    pub const CODE_SENT: &str = "Код отправлен на ваш телефон";
    pub const INVALID_PHONE: &str = "Введите корректный номер телефона";
    pub const INVALID_CODE: &str = "Введите 4-значный код";
    pub const MISSING_FIELDS: &str = "Заполните все поля";
    pub const UNKNOWN_COMPLEX: &str = "Выберите жилой комплекс из списка";
    pub const WELCOME: &str = "Добро пожаловать!";
    pub const REQUEST_CREATED: &str = "Заявка успешно создана!";
    pub const MISSING_REQUIRED_FIELDS: &str = "Заполните все обязательные поля";
    pub const LISTENING: &str = "Слушаю вас...";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        let message = match err {
            ValidationError::PhoneTooShort { .. } => messages::INVALID_PHONE,
            ValidationError::CodeLength { .. } => messages::INVALID_CODE,
            ValidationError::MissingApartmentFields => messages::MISSING_FIELDS,
            ValidationError::UnknownComplex(_) => messages::UNKNOWN_COMPLEX,
            ValidationError::MissingRequiredFields => messages::MISSING_REQUIRED_FIELDS,
        };
        Notification::error(message)
    }
}
