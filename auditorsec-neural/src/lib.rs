use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

pub mod error;
pub mod privacy;

pub use error::NeuralError;

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The interface for any text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model selector this backend sends with every request.
    fn model(&self) -> &str;
}

/// Direct HTTP client for the Gemini `generateContent` endpoint.
/// Uses reqwest instead of an SDK to keep the wire format under our control.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model_name: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name: model.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the JSON body for a single-turn prompt.
    pub fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        })
    }

    /// Pull the generated text out of a `generateContent` response.
    ///
    /// The text of every part of the first candidate is concatenated. A
    /// candidate with no text parts yields an empty string; a response with
    /// no candidates at all is an error.
    pub fn extract_text(response: &Value) -> Result<String> {
        let parts = response["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or(NeuralError::EmptyContent)?;

        let text: String = parts
            .iter()
            .filter_map(|p| p["text"].as_str())
            .collect();

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(NeuralError::MissingApiKey)?;
        let url = self.endpoint();

        tracing::debug!(model = %self.model_name, bytes = prompt.len(), "sending prompt");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .context("Failed to contact text-generation service")?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(NeuralError::Status {
                status: status.as_u16(),
                body: truncate_body(&text, 200),
            }
            .into());
        }

        let parsed: Value =
            serde_json::from_str(&text).context("Service returned malformed JSON")?;

        Self::extract_text(&parsed)
    }

    fn model(&self) -> &str {
        &self.model_name
    }
}

/// Cut an error body down to at most `max` bytes on a char boundary.
pub fn truncate_body(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
