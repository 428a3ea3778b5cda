//! Turns a chat result into what the kiosk shows and says.
//!
//! A chat exchange never fails from the user's point of view.  A JSON answer
//! without usable content (`EmptyResponse`, whatever the HTTP status) becomes
//! the configured empty-reply message, which is shown and spoken.  Everything
//! else (`Request`, `Timeout`, `Parse`, `Disabled`) becomes the
//! connection-error message, which is only shown.

use crate::config::ChatConfig;

use super::client::ChatError;

/// The assistant side of one exchange, ready for the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    /// Whether the text also goes through speech.
    pub speak: bool,
}

impl AssistantReply {
    pub fn resolve(result: Result<String, ChatError>, config: &ChatConfig) -> Self {
        match result {
            Ok(text) => Self { text, speak: true },
            Err(ChatError::EmptyResponse) => {
                log::warn!("chat: no usable reply, using fallback");
                Self {
                    text: config.empty_reply_message.clone(),
                    speak: true,
                }
            }
            Err(err) => {
                log::warn!("chat: {err}");
                Self {
                    text: config.connection_error_message.clone(),
                    speak: false,
                }
            }
        }
    }
}
