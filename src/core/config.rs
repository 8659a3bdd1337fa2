use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::ai::client::ClientConfig;
use crate::errors::SummarizeError;

/// Hugging Face Inference router, `facebook/bart-large-cnn` summarization model.
pub const DEFAULT_ENDPOINT: &str =
    "https://router.huggingface.co/hf-inference/models/facebook/bart-large-cnn";

pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

pub const TOKEN_VAR: &str = "HUGGINGFACE_TOKEN";
pub const ENDPOINT_VAR: &str = "SUMMARIZER_ENDPOINT";
pub const TIMEOUT_VAR: &str = "SUMMARIZER_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub huggingface_token: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint or timeout overrides are malformed.
    /// A missing token is not an error here; the client rejects it at call time.
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint or timeout overrides are malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let huggingface_token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let endpoint = match lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => validate_endpoint(raw.trim())?,
            None => DEFAULT_ENDPOINT.to_string(),
        };

        let timeout = match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_timeout(raw.trim())?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            huggingface_token,
            endpoint,
            timeout,
        })
    }

    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            api_token: self.huggingface_token.clone(),
            timeout: self.timeout,
        }
    }
}

fn validate_endpoint(raw: &str) -> Result<String, SummarizeError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(SummarizeError::ConfigError(format!(
            "{ENDPOINT_VAR}: unsupported scheme {other:?}"
        ))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, SummarizeError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(SummarizeError::ConfigError(format!(
            "{TIMEOUT_VAR}: expected a positive number of seconds, got {raw:?}"
        ))),
    }
}

/// Candidate `.env` locations: the working directory and its two parents.
#[must_use]
pub fn dotenv_paths() -> Vec<PathBuf> {
    let base = Path::new(".");
    vec![
        base.join(".env"),
        base.join("..").join(".env"),
        base.join("..").join("..").join(".env"),
    ]
}

/// Loads `KEY=VALUE` pairs from any `.env` file found in [`dotenv_paths`].
///
/// Variables already present in the process environment win, and nearer files
/// win over files further up the tree.
pub fn load_dotenv() {
    load_dotenv_from(&dotenv_paths());
}

/// Loads each existing file in `paths`, earliest first. Missing files are
/// skipped; a file never overrides a variable that is already set.
pub fn load_dotenv_from(paths: &[PathBuf]) {
    for path in paths {
        if !path.is_file() {
            continue;
        }
        match dotenvy::from_path(path) {
            Ok(()) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("Skipping {}: {}", path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.huggingface_token, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let config = AppConfig::from_lookup(lookup_from(&[(TOKEN_VAR, "   ")])).unwrap();
        assert!(config.huggingface_token.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (TOKEN_VAR, "hf_abc"),
            (ENDPOINT_VAR, "http://127.0.0.1:9000/summarize"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.huggingface_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/summarize");
        assert_eq!(config.timeout, Duration::from_secs(5));

        let client = config.client_config();
        assert_eq!(client.endpoint, config.endpoint);
        assert_eq!(client.api_token.as_deref(), Some("hf_abc"));
    }

    #[test]
    fn rejects_bad_endpoint() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENDPOINT_VAR, "not a url")])).unwrap_err();
        assert!(matches!(err, SummarizeError::ConfigError(_)));

        let err =
            AppConfig::from_lookup(lookup_from(&[(ENDPOINT_VAR, "ftp://example.com")])).unwrap_err();
        assert!(matches!(err, SummarizeError::ConfigError(_)));
    }

    #[test]
    fn rejects_bad_timeout() {
        for raw in ["0", "-3", "soon"] {
            let err = AppConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, raw)])).unwrap_err();
            assert!(
                matches!(err, SummarizeError::ConfigError(ref m) if m.contains(TIMEOUT_VAR)),
                "timeout {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn dotenv_files_fill_gaps_without_overriding() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(
            dir.path().join(".env"),
            "TLDR_DOTENV_LOADED=far\nTLDR_DOTENV_NEAREST=far\nTLDR_DOTENV_PRESET=far\n",
        )
        .unwrap();
        std::fs::write(
            nested.join(".env"),
            "TLDR_DOTENV_NEAREST=near\nTLDR_DOTENV_PRESET=near\n",
        )
        .unwrap();

        // SAFETY: the variable names are unique to this test.
        unsafe { env::set_var("TLDR_DOTENV_PRESET", "process") };

        load_dotenv_from(&[
            nested.join(".env"),
            nested.join("missing").join(".env"),
            dir.path().join(".env"),
        ]);

        assert_eq!(env::var("TLDR_DOTENV_LOADED").as_deref(), Ok("far"));
        assert_eq!(env::var("TLDR_DOTENV_NEAREST").as_deref(), Ok("near"));
        assert_eq!(env::var("TLDR_DOTENV_PRESET").as_deref(), Ok("process"));
    }
}
