//! Service request domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    Plumbing,
    Electricity,
    Elevator,
    Heating,
    CommonArea,
    Other,
}

impl RequestCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RequestCategory::Plumbing => "Сантехника",
            RequestCategory::Electricity => "Электрика",
            RequestCategory::Elevator => "Лифт",
            RequestCategory::Heating => "Отопление",
            RequestCategory::CommonArea => "Общие зоны",
            RequestCategory::Other => "Другое",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub category: RequestCategory,
    pub status: RequestStatus,
    pub created_on: NaiveDate,
    pub description: String,
}

impl ServiceRequest {
    pub fn is_active(&self) -> bool {
        self.status != RequestStatus::Completed
    }
}

/// Form contents of the "new request" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub title: String,
    pub category: Option<RequestCategory>,
    pub description: String,
}

impl RequestDraft {
    /// Returns the selected category when every required field is filled.
    pub fn validate(&self) -> Result<RequestCategory, ValidationError> {
        match self.category {
            Some(category)
                if !self.title.trim().is_empty() && !self.description.trim().is_empty() =>
            {
                Ok(category)
            }
            _ => Err(ValidationError::MissingRequiredFields),
        }
    }
}

/// Requests shown before the resident files anything.
pub fn sample_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "1".into(),
            title: "Протечка в ванной".into(),
            category: RequestCategory::Plumbing,
            status: RequestStatus::InProgress,
            created_on: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap_or_default(),
            description: "Течет кран под раковиной".into(),
        },
        ServiceRequest {
            id: "2".into(),
            title: "Не работает свет".into(),
            category: RequestCategory::Electricity,
            status: RequestStatus::New,
            created_on: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap_or_default(),
            description: "Пропало освещение на 5 этаже".into(),
        },
    ]
}
