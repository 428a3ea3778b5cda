//! Core `ChatClient` trait and `ApiChat` implementation.
//!
//! `ApiChat` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! Every send is a single stateless request: one optional system message plus
//! the user's message, no history, no retry.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ChatConfig;

// ---------------------------------------------------------------------------
// ChatError
// ---------------------------------------------------------------------------

/// Errors that can occur during a chat exchange.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("chat request timed out")]
    Timeout,

    /// The response body is not JSON.
    #[error("failed to parse chat response: {0}")]
    Parse(String),

    /// The service answered without usable text content.
    #[error("chat service returned an empty response")]
    EmptyResponse,

    /// The chat channel is switched off in the configuration.
    #[error("chat is disabled")]
    Disabled,
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ChatError::Timeout
        } else {
            ChatError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ChatClient trait
// ---------------------------------------------------------------------------

/// Async request/response chat backend.
///
/// Implementors must be `Send + Sync` so they can be shared with spawned
/// request tasks behind `Arc<dyn ChatClient>`.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, ChatError>;
}

// ---------------------------------------------------------------------------
// ApiChat
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// All connection details come from the [`ChatConfig`] passed to
/// [`ApiChat::from_config`].
pub struct ApiChat {
    client: reqwest::Client,
    config: ChatConfig,
}

impl ApiChat {
    /// Build an `ApiChat` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.
    pub fn from_config(config: &ChatConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, message: &str) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = self.config.system_prompt.as_deref() {
            if !system.trim().is_empty() {
                messages.push(serde_json::json!({ "role": "system", "content": system }));
            }
        }
        messages.push(serde_json::json!({ "role": "user", "content": message }));

        serde_json::json!({
            "model":       self.config.model,
            "messages":    messages,
            "stream":      false,
            "temperature": self.config.temperature,
        })
    }
}

/// Pull the first choice's message text out of a chat-completions response.
fn extract_reply(json: &serde_json::Value) -> Result<String, ChatError> {
    let text = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(ChatError::EmptyResponse)?
        .trim()
        .to_string();

    if text.is_empty() {
        return Err(ChatError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl ChatClient for ApiChat {
    /// The `Authorization: Bearer …` header is attached only when
    /// `config.api_key` is a non-empty string.
    async fn reply(&self, message: &str) -> Result<String, ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }

        let mut req = self
            .client
            .post(self.endpoint())
            .json(&self.request_body(message));

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        // Error statuses still carry a JSON body; it simply has no choices.
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("chat: service answered HTTP {status}");
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        extract_reply(&json)
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

/// Answers from a script; the last entry repeats once the script runs out.
#[cfg(test)]
pub struct ScriptedChat {
    script: std::sync::Mutex<std::collections::VecDeque<Result<String, ChatError>>>,
    last: std::sync::Mutex<Option<Result<String, ChatError>>>,
    pub received: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl ScriptedChat {
    pub fn new(script: Vec<Result<String, ChatError>>) -> Self {
        Self {
            script: std::sync::Mutex::new(script.into()),
            last: std::sync::Mutex::new(None),
            received: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }
}

#[cfg(test)]
#[async_trait]
impl ChatClient for ScriptedChat {
    async fn reply(&self, message: &str) -> Result<String, ChatError> {
        self.received.lock().unwrap().push(message.to_string());
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(result) = next {
            *last = Some(result.clone());
            result
        } else {
            last.clone().unwrap_or(Err(ChatError::EmptyResponse))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
