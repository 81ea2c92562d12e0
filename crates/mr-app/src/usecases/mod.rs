pub mod assistant;
pub mod auth;
pub mod navigation;
pub mod onboarding;
pub mod requests;
pub mod session;

pub use assistant::{AssistantConversation, AssistantTimings};
pub use auth::{AuthFlow, AuthFlowError};
pub use navigation::{ScreenContext, ScreenNavigator};
pub use onboarding::OnboardingFlow;
pub use requests::RequestsBook;
pub use session::{
    CompleteAuth, CompleteOnboarding, Logout, ResolveInitialState, SessionBootstrapper,
    SessionError, SessionSnapshot,
};
