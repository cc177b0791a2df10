//! Remote completion gateway — ordered, best-effort access to hosted
//! text-generation providers.
//!
//! ARCHITECTURAL RULE: handlers never call a provider API directly. They
//! compose a `CompletionRequest` and hand it to the `CompletionGateway`,
//! which tries each configured provider once, in priority order, and reports
//! exhaustion as `None` so the caller can fall back to the keyword responder.

pub mod gemini;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use self::gemini::GeminiProvider;
use self::openai::OpenAiProvider;

/// Shared HTTP timeout for all provider calls — the only timeout enforced at
/// this layer.
const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One role-tagged conversational message. Request-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A fully-composed completion request: system instructions (already carrying
/// the serialized portfolio data), the conversation, and an output cap.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub max_output_tokens: u32,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned empty content")]
    EmptyContent,
}

/// A hosted text-generation service. Implementations make a single best-effort
/// attempt per request: no retry, no backoff, no streaming.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

/// Ordered provider list tried strictly in sequence. Provider failures are
/// logged and swallowed here; callers only learn whether anyone answered.
pub struct CompletionGateway {
    providers: Vec<Arc<dyn CompletionProvider>>,
}

impl CompletionGateway {
    /// Builds the fixed priority order: Gemini first, OpenAI second. A
    /// provider without a credential is never constructed.
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        let mut providers: Vec<Arc<dyn CompletionProvider>> = Vec::new();
        if let Some(key) = &config.gemini_api_key {
            providers.push(Arc::new(GeminiProvider::new(http.clone(), key.clone())));
        }
        if let Some(key) = &config.openai_api_key {
            providers.push(Arc::new(OpenAiProvider::new(http.clone(), key.clone())));
        }
        Self { providers }
    }

    /// A gateway with no providers; every request falls through to the caller.
    pub fn disabled() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Tries each provider once, in order, returning the first non-empty
    /// answer. Every failure mode (network, API status, parse, empty body) is
    /// treated as "no answer" and never surfaced as an endpoint error.
    pub async fn complete(&self, request: &CompletionRequest) -> Option<String> {
        for provider in &self.providers {
            match provider.complete(request).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(
                        "Provider {} answered ({} chars)",
                        provider.name(),
                        text.len()
                    );
                    return Some(text);
                }
                Ok(_) => warn!("Provider {} returned empty content", provider.name()),
                Err(e) => warn!("Provider {} failed: {e}", provider.name()),
            }
        }
        None
    }
}
