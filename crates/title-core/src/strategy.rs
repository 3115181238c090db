use async_trait::async_trait;

use crate::error::Result;
use crate::request::GenerationRequest;
use crate::types::{GenerationMode, GenerationResult};

/// Value shipped in the sample environment file; treated as "not configured".
pub const PLACEHOLDER_API_KEY: &str = "your_actual_deepseek_api_key_here";

/// A source of generated titles.
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn mode(&self) -> GenerationMode;

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}

/// The model-provider API key, if one is usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Option<String>);

impl Credential {
    /// Blank values and the placeholder key both count as missing.
    pub fn from_raw(raw: Option<String>) -> Self {
        Self(
            raw.map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY),
        )
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Credential(<redacted>)"),
            None => f.write_str("Credential(None)"),
        }
    }
}
