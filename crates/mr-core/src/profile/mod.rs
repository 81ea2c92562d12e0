//! Resident profile domain model.
//!
//! A single `UserProfile` identifies the signed-in resident. It is created at
//! the end of the auth flow, persisted as JSON under the `userData` key,
//! overwritten wholesale and removed on logout.

pub mod catalog;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{is_known_complex, RESIDENTIAL_COMPLEXES};

/// Resident role within the apartment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    #[default]
    Owner,
    Tenant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub phone: String,
    pub apartment: String,
    pub entrance: String,
    pub status: ResidentStatus,
    pub complex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("profile field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("malformed profile payload: {0}")]
    Malformed(String),
}

impl UserProfile {
    /// Checks that every field is populated.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields = [
            ("phone", &self.phone),
            ("apartment", &self.apartment),
            ("entrance", &self.entrance),
            ("complex", &self.complex),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ProfileError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// Parses a stored payload.
    ///
    /// Unknown fields are ignored; missing or empty fields and unknown
    /// status values make the payload invalid.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let profile: UserProfile =
            serde_json::from_str(raw).map_err(|e| ProfileError::Malformed(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        serde_json::to_string(self).map_err(|e| ProfileError::Malformed(e.to_string()))
    }
}
