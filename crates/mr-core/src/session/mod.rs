//! Session domain models.
//!
//! The top-level application mode is never persisted directly. It is
//! re-derived at every start from the onboarding flag and the presence of a
//! stored profile.

use serde::{Deserialize, Serialize};

/// Storage keys shared by every key-value backend.
pub mod keys {
    /// Marks that the onboarding carousel has been shown.
    pub const HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";
    /// JSON-serialized `UserProfile`.
    pub const USER_DATA: &str = "userData";
    /// Value written when the onboarding flag is set.
    pub const FLAG_SET: &str = "true";
}

/// Top-level application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    Onboarding,
    Auth,
    Main,
}

impl AppState {
    /// Derives the mode from persisted facts.
    ///
    /// | onboarding flag | profile | state        |
    /// |-----------------|---------|--------------|
    /// | absent          | any     | `Onboarding` |
    /// | set             | absent  | `Auth`       |
    /// | set             | present | `Main`       |
    pub fn resolve(has_seen_onboarding: bool, has_profile: bool) -> Self {
        match (has_seen_onboarding, has_profile) {
            (false, _) => AppState::Onboarding,
            (true, false) => AppState::Auth,
            (true, true) => AppState::Main,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Onboarding => "onboarding",
            AppState::Auth => "auth",
            AppState::Main => "main",
        }
    }
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a stored flag value counts as set.
///
/// Any non-empty value counts, matching a truthiness check on the raw string.
pub fn is_flag_set(raw: Option<&str>) -> bool {
    raw.map(|v| !v.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_flag_is_always_onboarding() {
        assert_eq!(AppState::resolve(false, false), AppState::Onboarding);
        assert_eq!(AppState::resolve(false, true), AppState::Onboarding);
    }

    #[test]
    fn resolve_with_flag_depends_on_profile() {
        assert_eq!(AppState::resolve(true, false), AppState::Auth);
        assert_eq!(AppState::resolve(true, true), AppState::Main);
    }

    #[test]
    fn flag_value_truthiness() {
        assert!(is_flag_set(Some("true")));
        assert!(is_flag_set(Some("1")));
        assert!(!is_flag_set(Some("")));
        assert!(!is_flag_set(None));
    }

    #[test]
    fn app_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AppState::Main).unwrap(), r#""main""#);
        assert_eq!(AppState::Onboarding.to_string(), "onboarding");
    }
}
