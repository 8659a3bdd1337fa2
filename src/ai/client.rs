//! Summarization API client module
//!
//! Sends prompts to a Hugging Face style inference endpoint and pulls a single
//! summary string out of the candidate list it returns.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::core::models::{Prompt, RawSummary, SummaryStyle};
use crate::errors::SummarizeError;

/// Upper bound on how much of an error body is kept for diagnostics.
pub const ERROR_BODY_LIMIT: usize = 1024;

/// Connection settings for [`SummaryClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
}

/// One element of the remote response array.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub summary_text: Option<String>,
    #[serde(default)]
    pub generated_text: Option<String>,
}

type Extractor = fn(&Candidate) -> Option<&str>;

fn summary_field(candidate: &Candidate) -> Option<&str> {
    candidate.summary_text.as_deref()
}

fn generated_field(candidate: &Candidate) -> Option<&str> {
    candidate.generated_text.as_deref()
}

/// Fields consulted on a candidate, in order of preference.
const CANDIDATE_FIELDS: [(&str, Extractor); 2] = [
    ("summary_text", summary_field),
    ("generated_text", generated_field),
];

/// Picks the summary out of a decoded response: the first candidate's first
/// non-empty field, trimmed. Emptiness is judged before trimming, so a
/// whitespace-only `summary_text` still wins over `generated_text`.
///
/// # Errors
///
/// Returns `ProtocolError` when there are no candidates or the first one
/// carries no usable text.
pub fn extract_summary(candidates: &[Candidate]) -> Result<RawSummary, SummarizeError> {
    let first = candidates.first().ok_or_else(|| {
        SummarizeError::ProtocolError("empty response from API".to_string())
    })?;

    CANDIDATE_FIELDS
        .iter()
        .find_map(|(name, extract)| {
            extract(first)
                .filter(|text| !text.is_empty())
                .map(|text| {
                    debug!("Using `{}` field from first candidate", name);
                    RawSummary::new(text.trim())
                })
        })
        .ok_or_else(|| SummarizeError::ProtocolError("no summary text in response".to_string()))
}

/// Client for the remote summarization endpoint.
pub struct SummaryClient {
    http: Client,
    config: ClientConfig,
}

impl SummaryClient {
    /// # Errors
    ///
    /// Returns `TransportError` if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, SummarizeError> {
        let http = Client::builder().timeout(config.timeout).build().map_err(|e| {
            SummarizeError::TransportError(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self { http, config })
    }

    /// Sends `prompt` to the endpoint and returns the trimmed summary text.
    ///
    /// Exactly one request is made; nothing is retried.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if no API token is configured (checked before any I/O)
    /// - `TransportError` if the request cannot be sent or times out
    /// - `ProtocolError` for non-success statuses or unusable response bodies
    pub async fn fetch_summary(
        &self,
        style: SummaryStyle,
        prompt: Prompt,
    ) -> Result<RawSummary, SummarizeError> {
        let token = self
            .config
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                SummarizeError::ConfigError(
                    "missing HUGGINGFACE_TOKEN (required by router.huggingface.co)".to_string(),
                )
            })?;

        #[cfg(feature = "debug-logs")]
        info!("Using summarization prompt:\n{}", prompt);

        let max_new_tokens = style.max_new_tokens();
        info!(
            "Requesting {} summary from {} (max_new_tokens={}, prompt_chars={})",
            style,
            self.config.endpoint,
            max_new_tokens,
            prompt.as_str().chars().count()
        );

        let request_body = SummaryRequest {
            inputs: prompt.as_str(),
            parameters: GenerationParameters { max_new_tokens },
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                SummarizeError::TransportError(format!("Summarization request failed: {e}"))
            })?;

        let status = response.status();
        debug!("Summarization API responded with status {}", status);

        if !status.is_success() {
            let body = read_bounded(response, ERROR_BODY_LIMIT).await;
            warn!("Summarization API returned status {}", status);
            return Err(SummarizeError::ProtocolError(format!(
                "API error: status {} body: {}",
                status.as_u16(),
                body
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            SummarizeError::TransportError(format!("Failed to read response body: {e}"))
        })?;
        let candidates: Vec<Candidate> = serde_json::from_slice(&bytes)?;
        debug!("Decoded {} candidate(s)", candidates.len());

        extract_summary(&candidates)
    }
}

/// Reads at most `limit` bytes of the body for error reporting. A failed read
/// ends early and keeps whatever already arrived.
async fn read_bounded(mut response: reqwest::Response, limit: usize) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(limit.min(4096));
    while buf.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(limit - buf.len());
                buf.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Failed to read error response body: {}", e);
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).trim().to_string()
}
