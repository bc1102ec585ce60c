/// LLM Client: the single point of entry for all model calls in the interview service.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Interview logic talks to the `ChatModel` trait; `GeminiClient` is the production backend.
///
/// Model: gemini-2.5-flash at temperature 0.5 (hardcoded, do not make configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for every interview turn.
pub const MODEL: &str = "gemini-2.5-flash";
const TEMPERATURE: f32 = 0.5;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of conversation as seen by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A chat-completion backend: system prompt plus ordered turns in, reply text out.
///
/// Carried in `AppState` as `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    /// A candidate without text (safety block, token limit) yields an empty string;
    /// `None` only when there is no candidate at all.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        Some(
            candidate
                .content
                .as_ref()
                .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
                .unwrap_or_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Groups consecutive same-role turns into one `Content` with several parts.
fn build_contents(messages: &[ChatMessage]) -> Vec<Content<'_>> {
    let mut contents: Vec<Content<'_>> = Vec::new();

    for message in messages {
        let role = match message.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        };
        let part = Part {
            text: &message.content,
        };

        match contents.last_mut() {
            Some(last) if last.role == Some(role) => last.parts.push(part),
            _ => contents.push(Content {
                role: Some(role),
                parts: vec![part],
            }),
        }
    }

    contents
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` endpoint. One request per call, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: build_contents(messages),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let gemini_response: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(gemini_response)
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response = self.call(system, messages).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }
}

/// Scripted `ChatModel` for tests: returns a canned reply and records every call.
#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    pub struct ScriptedModel {
        reply: Option<String>,
        calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    }

    impl ScriptedModel {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Every call fails as if the provider returned 503.
        pub fn failing() -> Self {
            Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, Vec<ChatMessage>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn complete(
            &self,
            system: &str,
            messages: &[ChatMessage],
        ) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), messages.to_vec()));
            self.reply.clone().ok_or(LlmError::Api {
                status: 503,
                message: "model unavailable".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_contents_maps_roles() {
        let messages = vec![
            ChatMessage::assistant("Hello! First question?"),
            ChatMessage::user("My answer"),
        ];
        let contents = build_contents(&messages);
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, Some("model"));
        assert_eq!(contents[1].role, Some("user"));
    }

    #[test]
    fn test_build_contents_merges_consecutive_user_turns() {
        let messages = vec![
            ChatMessage::assistant("Question"),
            ChatMessage::user("Answer"),
            ChatMessage::user("Instruction"),
        ];
        let contents = build_contents(&messages);
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[1].parts.len(), 2);
        assert_eq!(contents[1].parts[0].text, "Answer");
        assert_eq!(contents[1].parts[1].text, "Instruction");
    }

    #[test]
    fn test_request_serializes_gemini_shape() {
        let messages = vec![ChatMessage::user("hi")];
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "persona" }],
            },
            contents: build_contents(&messages),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "persona");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Great, "}, {"text": "next up."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Great, next up."));
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 12);
        assert_eq!(usage.candidates_token_count, 4);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_blocked_candidate_yields_empty_text() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some(""));
    }

    #[test]
    fn test_candidate_with_empty_parts_yields_empty_text() {
        let json = r#"{"candidates": [{"content": {"role": "model", "parts": []}, "finishReason": "MAX_TOKENS"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some(""));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("key".to_string(), "http://localhost:9000/v1beta/".to_string());
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
