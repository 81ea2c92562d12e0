//! Commands invoked by the front end.
//!
//! Each command opens a `command.*` span and maps errors to display strings.

pub mod assistant;
pub mod auth;
pub mod navigation;
pub mod onboarding;
pub mod requests;
pub mod session;

pub(crate) fn wrong_mode(expected: &str) -> String {
    format!("not available outside {expected}")
}
