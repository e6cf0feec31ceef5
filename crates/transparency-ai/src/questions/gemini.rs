use super::provider::{CompletionProvider, ProviderError};
use crate::config::GeminiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Generative Language REST API.
///
/// Constructed once at process start; a missing API key is a valid state in
/// which the probe reports unavailable and the generator never calls
/// `complete`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self::with_base_url(config, API_BASE_URL)
    }

    pub fn with_base_url(config: &GeminiConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    async fn list_models(&self, api_key: &str) -> Result<(), ProviderError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        response
            .error_for_status()
            .map_err(|err| ProviderError::Rejected(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn is_available(&self) -> bool {
        let Some(api_key) = self.api_key.as_deref() else {
            return false;
        };

        match self.list_models(api_key).await {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "gemini availability probe failed");
                false
            }
        }
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Rejected("api key not configured".to_string()))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
                max_output_tokens: 1000,
            },
        };

        let response = self
            .http
            .post(url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| ProviderError::Rejected(err.to_string()))?;

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.into_iter())
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
