mod flow;

pub use flow::{AuthFlow, AuthFlowError};
