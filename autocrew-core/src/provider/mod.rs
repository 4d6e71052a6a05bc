//! # LLM Provider Interface
//!
//! A trait-based abstraction for communicating with a local model runtime.
//!
//! ## Design
//! - `LlmProvider` trait defines the core interface
//! - `OllamaProvider` talks to an Ollama daemon over HTTP
//! - Every call blocks until the full reply is returned: no streaming,
//!   no tool calls, no concurrent requests

pub mod ollama;

pub use ollama::OllamaProvider;

use autocrew_error::Result;

// ============================================================================
// Core Types
// ============================================================================

/// Request parameters for a completion
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub model: String,
    pub content: String,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// The main LLM provider trait
#[allow(async_fn_in_trait)]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "ollama")
    fn name(&self) -> &str;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Send a completion request and get the full response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Simple prompt -> text helper
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let request = CompletionRequest::new(prompt);
        let response = self.complete(request).await?;
        Ok(response.content)
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for creating providers
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Connect to a local Ollama daemon on its default port
    pub fn ollama() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "openhermes".into(),
            timeout_secs: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::ollama()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_builder() {
        let request = CompletionRequest::new("Hello")
            .with_model("openhermes")
            .with_temperature(0.7);

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.model, Some("openhermes".into()));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn test_provider_config() {
        let config = ProviderConfig::ollama();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "openhermes");
        assert_eq!(config.timeout_secs, None);

        let config = ProviderConfig::ollama()
            .with_base_url("http://127.0.0.1:8080")
            .with_model("mistral")
            .with_timeout(300);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.timeout_secs, Some(300));
    }
}
