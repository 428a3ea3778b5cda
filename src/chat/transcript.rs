//! Bounded chat transcript shown in the kiosk window.

use std::collections::VecDeque;

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One line of the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Rolling window of chat entries.  Oldest entries are dropped once the
/// window exceeds `max_entries`.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    entries: VecDeque<ChatEntry>,
    max_entries: usize,
}

impl ChatTranscript {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries.min(64)),
            max_entries,
        }
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push_back(ChatEntry {
            speaker,
            text: text.into(),
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text);
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Speaker::Assistant, text);
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::with_capacity(200)
    }
}
