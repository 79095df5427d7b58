//! LLM Client: the single point of entry for all Gemini API calls in Pathfinder.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gemini-3-flash-preview (hardcoded, not configurable).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{AnalysisFailed, FailureCause};

pub mod prompts;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// The model used for all LLM calls in Pathfinder.
pub const MODEL: &str = "gemini-3-flash-preview";
const JSON_MIME_TYPE: &str = "application/json";
/// Thinking is disabled; the schema alone shapes the output.
const THINKING_BUDGET: u32 = 0;

/// One schema-constrained call: system instruction, user turn, output schema.
#[derive(Debug, Clone, Copy)]
pub struct StructuredPrompt<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub schema: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: RequestContent<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: StructuredPrompt<'a>) -> Self {
        Self {
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart {
                    text: prompt.system,
                }],
            },
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt.user }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: prompt.schema,
                thinking_config: ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl LlmResponse {
    /// Joins the text parts of the first candidate. `None` when there is no text.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Why the first candidate stopped, e.g. `SAFETY` or `MAX_TOKENS`.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
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

/// The single LLM client used by all services in Pathfinder.
/// Wraps the Gemini `generateContent` API with schema-constrained JSON output.
/// Makes exactly one attempt per call.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL
        )
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(&self, prompt: StructuredPrompt<'_>) -> Result<LlmResponse, FailureCause> {
        let request_body = GenerateContentRequest::new(prompt);

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
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(classify_failure(status, message));
        }

        // A 200 with an undecodable body is a malformed response, not a transport fault
        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and deserializes the text response as JSON into `T`.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: StructuredPrompt<'_>,
    ) -> Result<T, AnalysisFailed> {
        let response = self.call(prompt).await?;

        let Some(text) = response.text() else {
            warn!(
                "LLM returned no text (finish_reason={})",
                response.finish_reason().unwrap_or("none")
            );
            return Err(FailureCause::EmptyResponse.into());
        };

        decode_json(&text)
    }
}

/// Decodes model output as JSON into `T`, tolerating markdown code fences.
/// Absent or ill-typed fields fail; nothing is defaulted.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, AnalysisFailed> {
    // Strip markdown code fences if the model wraps JSON in them
    Ok(serde_json::from_str(strip_json_fences(text))?)
}

/// Maps a non-success provider status to a failure cause.
/// Gemini reports a bad key as 400 INVALID_ARGUMENT, so the message is checked too.
fn classify_failure(status: StatusCode, message: String) -> FailureCause {
    let bad_key = status == StatusCode::BAD_REQUEST && message.contains("API key");
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || bad_key {
        FailureCause::Unauthorized {
            status: status.as_u16(),
            message,
        }
    } else {
        FailureCause::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match stripped {
        Some(inner) => {
            let inner = inner.trim_start();
            inner
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(inner)
        }
        None => text,
    }
}
