//! Minimal LLM API wrapper for the summarization provider.
//!
//! One OpenAI-compatible chat-completions call, typed request/response, no
//! streaming and no retry. The provider credential comes in via
//! [`crate::config::ProviderConfig`].

pub mod openai;
mod types;

pub use types::{Error, Message, MessageRole, Response, TokenUsage};
