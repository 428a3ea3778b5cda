//! Free-text chat channel.
//!
//! * [`ChatClient`]: async trait for request/response chat backends.
//! * [`ApiChat`]: OpenAI-compatible chat-completions client.
//! * [`AssistantReply`]: maps a chat result onto the shown/spoken reply.
//! * [`ChatTranscript`]: bounded user/assistant history for the UI.

pub mod client;
pub mod fallback;
pub mod transcript;

pub use client::{ApiChat, ChatClient, ChatError};
pub use fallback::AssistantReply;
pub use transcript::{ChatEntry, ChatTranscript, Speaker};

#[cfg(test)]
pub use client::ScriptedChat;
