//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use mr_core::ports::{AssistantResponderPort, ClockPort, NotificationPort, SessionStorePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Session dependencies
    pub session_store: Arc<dyn SessionStorePort>,

    // UI dependencies
    pub notifier: Arc<dyn NotificationPort>,

    // Assistant dependencies
    pub responder: Arc<dyn AssistantResponderPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
