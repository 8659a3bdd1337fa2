use std::fmt;
use std::str::FromStr;

/// Requested summary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryStyle {
    Short,
    Medium,
    Bullet,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [Self::Short, Self::Medium, Self::Bullet];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Bullet => "bullet",
        }
    }

    /// Generation budget sent to the remote model as `max_new_tokens`.
    #[must_use]
    pub const fn max_new_tokens(self) -> u32 {
        match self {
            Self::Short => 60,
            Self::Medium => 160,
            Self::Bullet => 200,
        }
    }

    /// Number of sentences kept when formatting prose styles; `None` for bullets.
    #[must_use]
    pub const fn sentence_limit(self) -> Option<usize> {
        match self {
            Self::Short => Some(2),
            Self::Medium => Some(4),
            Self::Bullet => None,
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "bullet" => Ok(Self::Bullet),
            _ => Err(format!(
                "invalid --type {normalized:?} (use short|medium|bullet)"
            )),
        }
    }
}

/// Instruction text sent to the remote model. Built once, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    #[must_use]
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary text as returned by the remote model, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSummary(String);

impl RawSummary {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawSummary {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for RawSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
