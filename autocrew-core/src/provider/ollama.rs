//! Ollama provider implementation
//!
//! Talks to a locally running Ollama daemon through its native
//! `/api/generate` endpoint with `stream: false`, so each request blocks
//! until the whole completion is available.

use super::*;
use autocrew_error::Error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Ollama provider
pub struct OllamaProvider {
    client: Client,
    config: ProviderConfig,
}

impl OllamaProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Provider for the local daemon with the default model
    pub fn local() -> Self {
        Self::new(ProviderConfig::ollama())
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request.model.as_deref().unwrap_or(self.default_model());

        let api_request = OllamaRequest {
            model: model.to_string(),
            prompt: request.prompt,
            stream: false,
            options: request.temperature.map(|t| OllamaOptions { temperature: t }),
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url()))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| {
                Error::network_failed(e.to_string())
                    .with_operation("provider::complete")
                    .with_context("base_url", self.base_url())
                    .set_source(e)
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::inference_failed(text)
                .with_operation("provider::complete")
                .with_context("status", status.to_string())
                .with_context("model", model));
        }

        let api_response: OllamaResponse = response.json().await.map_err(|e| {
            Error::parse_failed(e.to_string())
                .with_operation("provider::complete")
                .with_context("model", model)
                .set_source(e)
        })?;

        Ok(CompletionResponse {
            model: api_response.model,
            content: api_response.response,
        })
    }
}

// ============================================================================
// Ollama API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = OllamaRequest {
            model: "openhermes".into(),
            prompt: "hello".into(),
            stream: false,
            options: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "openhermes");
        assert_eq!(json["stream"], false);
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"model":"openhermes","response":"\"role\",\"goal\"","done":true}"#;
        let parsed: OllamaResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.model, "openhermes");
        assert_eq!(parsed.response, "\"role\",\"goal\"");
    }

    #[test]
    fn test_provider_defaults() {
        let provider = OllamaProvider::local();
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.default_model(), "openhermes");
    }
}
