use ghosted_core::message::{ChatMessage, ChatRole, MessageContent};
use ghosted_core::profile::StyleProfile;

/// Number of history entries included in a model request. The stored
/// history is never truncated; only the request window is.
pub const MAX_CONTEXT: usize = 20;

/// One conversational context: the persona system prompt, the extracted
/// style profile, and the append-only message history.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub system: String,
    pub profile: StyleProfile,
    pub messages: Vec<ChatMessage>,
    pub created_at: jiff::Timestamp,
}

impl Session {
    /// A fresh session, seeded with the persona's opening message.
    pub fn new(id: String, system: String, profile: StyleProfile, opening: String) -> Self {
        Session {
            id,
            system,
            profile,
            messages: vec![ChatMessage::assistant(opening)],
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Append one entry to the history.
    pub fn push(&mut self, role: ChatRole, content: MessageContent) {
        self.messages.push(ChatMessage { role, content });
    }

    /// The slice of history sent to the completion provider: the most
    /// recent [`MAX_CONTEXT`] entries. The system prompt is carried
    /// separately and never counts against the window.
    pub fn context_window(&self) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(MAX_CONTEXT);
        &self.messages[start..]
    }
}
