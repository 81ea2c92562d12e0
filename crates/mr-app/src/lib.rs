//! MyResidence application orchestration layer
//!
//! This crate contains the use cases and orchestrators that drive the
//! session, the signup flow and the screens of the main shell.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    AssistantConversation, AssistantTimings, AuthFlow, AuthFlowError, OnboardingFlow,
    RequestsBook, ScreenContext, ScreenNavigator, SessionBootstrapper, SessionError,
};
