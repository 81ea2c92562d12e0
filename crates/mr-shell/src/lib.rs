//! MyResidence shell layer
//!
//! Bootstraps the process (config, tracing, dependency wiring) and exposes
//! the commands a front end calls to drive the session and the screens.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{AppRuntime, SessionView};
