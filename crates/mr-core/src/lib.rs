//! # mr-core
//!
//! Core domain models and state machines for MyResidence.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod assistant;
pub mod auth;
pub mod config;
pub mod navigation;
pub mod notification;
pub mod onboarding;
pub mod ports;
pub mod profile;
pub mod requests;
pub mod session;
pub mod validation;

// Re-export commonly used types at the crate root
pub use auth::{AuthAction, AuthEvent, AuthState, AuthStateMachine, AuthStep};
pub use config::AppConfig;
pub use navigation::{Navigator, Screen};
pub use notification::{Notification, NotificationLevel};
pub use profile::{ResidentStatus, UserProfile};
pub use session::AppState;
pub use validation::ValidationError;
