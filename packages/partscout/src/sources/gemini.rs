//! Gemini implementation of the text model trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use partscout::sources::GeminiModel;
//! use partscout::ModelConfig;
//!
//! let model = GeminiModel::new(ModelConfig::default().with_api_key("AIza..."))?;
//! let reply = model.generate("List three alternatives to LM317").await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScoutError};
use crate::traits::model::TextModel;
use crate::types::config::ModelConfig;

/// Gemini `generateContent` client.
pub struct GeminiModel {
    config: ModelConfig,
    client: reqwest::Client,
}

impl GeminiModel {
    /// Create a client. The API key is checked per call, not here.
    pub fn new(config: ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScoutError::Model(Box::new(e)))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(ScoutError::MissingCredential {
                name: "GEMINI_API_KEY",
            })?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::Model(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScoutError::model(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::Model(Box::new(e)))?;

        reply_text(parsed)
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

/// Join the text parts of the first candidate.
fn reply_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ScoutError::EmptyReply);
    }
    Ok(text)
}

// =============================================================================
// Request/Response types
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_joins_parts() {
        let raw = r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "1. LM1117 - "}, {"text": "LDO - TI"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(reply_text(parsed).unwrap(), "1. LM1117 - LDO - TI");
    }

    #[test]
    fn test_blocked_prompt_is_empty_reply() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(matches!(reply_text(parsed), Err(ScoutError::EmptyReply)));
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part { text: "hi".into() }],
            }],
            generation_config: GenerationConfig { temperature: 0.2 },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert!(json["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_endpoint_uses_model_name() {
        let model = GeminiModel::new(
            ModelConfig::default()
                .with_model("gemini-1.5-pro")
                .with_base_url("http://localhost:9000/v1beta/"),
        )
        .unwrap();
        assert_eq!(
            model.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(model.name(), "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn test_missing_key_is_reported_at_call_time() {
        let model = GeminiModel::new(ModelConfig::default()).unwrap();
        let err = model.generate("prompt").await.unwrap_err();
        assert!(matches!(
            err,
            ScoutError::MissingCredential {
                name: "GEMINI_API_KEY"
            }
        ));
    }
}
