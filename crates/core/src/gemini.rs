//! Grounded multimodal request against the Gemini `generateContent` API.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::AnalyzerConfig,
    error::{AnalysisError, Result},
    prompt::coaching_prompt,
    provider::Provider,
    sport::Sport,
    types::{FrameSequence, GroundingCitation, ModelAnswer},
};

/// Anything that can turn frames into a grounded coaching answer.
#[async_trait]
pub trait CoachingModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn analyze(&self, sport: Sport, frames: &FrameSequence) -> Result<ModelAnswer>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    provider: Provider,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            provider: config.provider.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CoachingModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn analyze(&self, sport: Sport, frames: &FrameSequence) -> Result<ModelAnswer> {
        let request = build_request(&coaching_prompt(sport), frames);
        info!(model = %self.model, provider = self.provider.name(), %sport, "requesting analysis");

        let response = self
            .http
            .post(self.provider.generate_url(&self.model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let payload: Value =
            serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body.clone()));

        if !status.is_success() {
            let message = payload["error"]["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or(body);
            return Err(AnalysisError::ApiStatus {
                status: status.as_u16(),
                message,
            });
        }

        let answer = parse_response(&payload)?;
        info!(
            text_len = answer.text.len(),
            citations = answer.citations.len(),
            "analysis received"
        );
        Ok(answer)
    }
}

pub fn build_request(prompt: &str, frames: &FrameSequence) -> Value {
    let mut parts = vec![serde_json::json!({ "text": prompt })];
    parts.extend(frames.iter().map(|frame| {
        serde_json::json!({
            "inlineData": {
                "mimeType": "image/jpeg",
                "data": STANDARD.encode(frame.as_bytes()),
            }
        })
    }));

    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": parts,
            }
        ],
        "tools": [
            { "googleSearch": {} },
            { "googleMaps": {} },
        ],
    })
}

/// Pull the answer text and grounding citations out of a response body.
///
/// Grounding chunks that are neither `web` nor `maps` are skipped.
pub fn parse_response(response: &Value) -> Result<ModelAnswer> {
    let candidate = response["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| AnalysisError::InvalidResponse {
            reason: match response["promptFeedback"]["blockReason"].as_str() {
                Some(reason) => format!("prompt blocked: {reason}"),
                None => "no candidates in response".to_string(),
            },
        })?;

    let text = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let citations = candidate["groundingMetadata"]["groundingChunks"]
        .as_array()
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| {
                    match serde_json::from_value::<GroundingCitation>(chunk.clone()) {
                        Ok(citation) => Some(citation),
                        Err(e) => {
                            debug!(error = %e, "skipping grounding chunk");
                            None
                        }
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(ModelAnswer { text, citations })
}
