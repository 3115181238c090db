use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// No usable credential; titles come from the local heuristics.
    Test,
    /// Titles come from the remote completion API.
    Live,
}

impl GenerationMode {
    pub fn is_test(self) -> bool {
        matches!(self, GenerationMode::Test)
    }
}

/// Token counters reported by the completion API, passed through as sent.
///
/// Provider-specific counters (e.g. DeepSeek's `prompt_cache_hit_tokens`)
/// land in `extra` and are serialized back alongside the standard ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub titles: Vec<String>,
    pub mode: GenerationMode,
    pub usage: Option<TokenUsage>,
}

impl GenerationResult {
    pub fn test(titles: Vec<String>) -> Self {
        Self {
            titles,
            mode: GenerationMode::Test,
            usage: None,
        }
    }

    pub fn live(titles: Vec<String>, usage: Option<TokenUsage>) -> Self {
        Self {
            titles,
            mode: GenerationMode::Live,
            usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_deserializes_with_missing_counters() {
        let usage: TokenUsage = serde_json::from_str(r#"{"total_tokens": 12}"#).unwrap();
        assert_eq!(usage.prompt_tokens, None);
        assert_eq!(usage.total_tokens, Some(12));
    }

    #[test]
    fn usage_keeps_provider_counters_and_tolerates_null() {
        let raw = serde_json::json!({
            "prompt_tokens": null,
            "completion_tokens": 12,
            "total_tokens": 21,
            "prompt_cache_hit_tokens": 4,
            "prompt_cache_miss_tokens": 5
        });
        let usage: TokenUsage = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(usage.prompt_tokens, None);
        assert_eq!(usage.extra["prompt_cache_hit_tokens"], 4);
        assert_eq!(serde_json::to_value(&usage).unwrap(), raw);
    }

    #[test]
    fn constructors_set_mode() {
        assert!(GenerationResult::test(vec![]).mode.is_test());
        let live = GenerationResult::live(vec!["a".into()], Some(TokenUsage::default()));
        assert_eq!(live.mode, GenerationMode::Live);
        assert!(live.usage.is_some());
    }
}
