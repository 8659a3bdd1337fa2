use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to reach summarization API: {0}")]
    TransportError(String),

    #[error("Unexpected response from summarization API: {0}")]
    ProtocolError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::TransportError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::ProtocolError(format!("failed to decode response: {error}"))
    }
}

impl From<url::ParseError> for SummarizeError {
    fn from(error: url::ParseError) -> Self {
        SummarizeError::ConfigError(format!("invalid endpoint URL: {error}"))
    }
}
