/// Produces the assistant's reply to a resident's question.
pub trait AssistantResponderPort: Send + Sync {
    fn respond(&self, question: &str) -> String;
}
