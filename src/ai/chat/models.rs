//! The core models for managing a stateful chat with an LLM.
use crate::openai::{Message, Role};

/// An ordered, append-only list of messages for one conversation. The
/// first message is always the system instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new(system_message: &str) -> Self {
        Self(vec![Message::new(Role::System, system_message)])
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // A transcript always holds the system message
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
