//! OpenAI-compatible chat-completions provider.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::llm::{Error, Message, Response, TokenUsage};

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    use std::sync::OnceLock;
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client")
    })
}

/// Chat-completions request format
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    /// `null` when the completion carries no text.
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Execute one chat request against the configured endpoint.
///
/// A completion without text (no choice, or a `null` content) yields an
/// empty `content`, not an error; callers that need to distinguish can check
/// `Response::content::is_empty`.
pub async fn chat(config: &ProviderConfig, messages: &[Message]) -> Result<Response, Error> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| Error::new("openai", "no API key configured (set OPENAI_API_KEY)"))?;

    let url = format!("{}/chat/completions", config.base_url);

    let request = ChatRequest {
        model: config.model.clone(),
        messages: messages
            .iter()
            .map(|msg| ChatMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content.clone(),
            })
            .collect(),
    };

    let response = http_client()
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| Error::new("openai", format!("HTTP request failed: {}", e)))?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        // Surface the provider's own message when the body carries one
        if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&error_text) {
            if let Some(error_msg) = error_json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return Err(Error::new("openai", error_msg));
            }
        }

        return Err(Error::new(
            "openai",
            format!("HTTP {}: {}", status, error_text),
        ));
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .map_err(|e| Error::new("openai", format!("Failed to parse response: {}", e)))?;

    let content = chat_response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .unwrap_or_default();

    let usage = chat_response
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        })
        .unwrap_or_default();

    Ok(Response {
        content,
        model: chat_response.model,
        usage,
    })
}
