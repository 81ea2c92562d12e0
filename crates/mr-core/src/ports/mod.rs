//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `mr-core/ports`, ask yourself:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Is it implemented by the infrastructure layer?**
//!
//! If both answers are **yes**, place it here.

pub mod app_dirs;
mod assistant;
mod clock;
pub mod errors;
pub mod key_value;
pub mod notification;
pub mod session_store;

pub use app_dirs::AppDirsPort;
pub use assistant::AssistantResponderPort;
pub use clock::ClockPort;
pub use errors::{AppDirsError, SessionStoreError};
pub use key_value::KeyValueStorePort;
pub use notification::NotificationPort;
pub use session_store::SessionStorePort;
