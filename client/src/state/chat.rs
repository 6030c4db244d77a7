//! Chat transcript state and the message list's render decision.
//!
//! DESIGN
//! ======
//! `MessageListView::resolve` encodes the list's precedence (error, empty
//! suggestions, loading skeletons, transcript) in one place so the component
//! and its tests agree on which panel a given input produces.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt;

use leptos::prelude::Callback;
use serde::{Deserialize, Serialize};

/// Example prompts offered on an empty conversation.
pub const SUGGESTED_PROMPTS: [&str; 5] = [
    "What's the proper technique for a one-handed backhand?",
    "How should I approach playing on clay courts?",
    "What exercises help improve serve power?",
    "Can you analyze why my second serve is inconsistent?",
    "What's a good training routine for a 3.5 NTRP player?",
];

/// Number of placeholder rows shown while the first response loads.
pub const SKELETON_ROWS: usize = 3;

/// One chat message as delivered by the assistant backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_from_ai: bool,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl ChatMessage {
    /// Build a message stamped with the current time.
    #[must_use]
    pub fn now(content: impl Into<String>, is_from_ai: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            is_from_ai,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Side of the list this message sits on.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        if self.is_from_ai { Alignment::Start } else { Alignment::End }
    }
}

/// Horizontal placement of a message row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Left side; assistant messages.
    Start,
    /// Right side; user messages.
    End,
}

impl Alignment {
    /// BEM modifier used by the list stylesheet.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Failure reported by the caller, shown verbatim by the error display.
#[derive(Clone)]
pub struct ChatError {
    pub message: String,
    /// Optional category such as `network` or `rate_limit`.
    pub kind: Option<String>,
    pub retry: Option<Callback<()>>,
}

impl ChatError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: None, retry: None }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: Callback<()>) -> Self {
        self.retry = Some(retry);
        self
    }
}

impl fmt::Debug for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatError")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("retry", &self.retry.is_some())
            .finish()
    }
}

/// Which panel the message list renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageListView {
    Error,
    Suggestions,
    Skeletons,
    /// Transcript; `typing` appends the pending-response indicator.
    Messages { typing: bool },
}

impl MessageListView {
    #[must_use]
    pub fn resolve(message_count: usize, is_loading: bool, has_error: bool) -> Self {
        if has_error {
            Self::Error
        } else if message_count == 0 && !is_loading {
            Self::Suggestions
        } else if message_count == 0 {
            Self::Skeletons
        } else {
            Self::Messages { typing: is_loading }
        }
    }
}

/// Conversation state owned by the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A response is pending.
    pub loading: bool,
    pub error: Option<ChatError>,
}

impl ChatState {
    /// Record the user's prompt and wait for a reply. Blank prompts and
    /// prompts sent while a reply is pending are ignored.
    pub fn submit(&mut self, prompt: &str) -> Option<ChatMessage> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.loading {
            return None;
        }
        let message = ChatMessage::now(prompt, false);
        self.messages.push(message.clone());
        self.loading = true;
        self.error = None;
        Some(message)
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn receive(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.loading = false;
    }

    /// Stop waiting and surface `error` in place of the transcript.
    pub fn fail(&mut self, error: ChatError) {
        self.loading = false;
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clear the error and wait again for a reply to the last prompt.
    /// Returns the prompt to resend, if there is one.
    pub fn resume(&mut self) -> Option<String> {
        self.error = None;
        let prompt = self.last_prompt().map(str::to_owned);
        self.loading = prompt.is_some();
        prompt
    }

    /// Last user prompt, used when a failed request is retried.
    #[must_use]
    pub fn last_prompt(&self) -> Option<&str> {
        self.messages.iter().rev().find(|m| !m.is_from_ai).map(|m| m.content.as_str())
    }
}
