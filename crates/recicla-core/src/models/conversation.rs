use serde::{Deserialize, Serialize};

/// Number of most recent turns that are fed back into a prompt.
pub const HISTORY_WINDOW: usize = 8;

/// A single recorded turn of a conversation.
///
/// Turns are kept by the caller in chronological order; this crate never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Role of a conversation turn.
///
/// Anything other than `"user"` is treated as the assistant, so UI layers
/// that record extra roles (e.g. `"system"`) still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    #[serde(other)]
    Assistant,
}

/// The trailing window of `history` that is used when building a prompt,
/// oldest first.
pub fn recent_turns(history: &[ConversationTurn]) -> &[ConversationTurn] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}
