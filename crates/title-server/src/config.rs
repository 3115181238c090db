//! Server configuration.
//!
//! Built from command-line flags (with environment fallbacks) in `main.rs`;
//! everything the request handlers need flows through this struct.

use std::time::Duration;

use title_llm::{PromptStyle, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Environment variable holding the model-provider key.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixed key from the command line. When `None` the key is read from
    /// `api_key_env` on every request.
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub llm_base_url: String,
    pub model: String,
    pub prompt_style: PromptStyle,
    pub mock_delay: Duration,
    pub llm_timeout: Duration,
    pub session_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_key: None,
            api_key_env: API_KEY_ENV.to_string(),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt_style: PromptStyle::Split,
            mock_delay: Duration::from_millis(2000),
            llm_timeout: Duration::from_secs(60),
            session_header: "x-user-id".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_deepseek() {
        let config = ServerConfig::default();
        assert_eq!(config.llm_base_url, "https://api.deepseek.com/v1");
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.api_key_env, "DEEPSEEK_API_KEY");
        assert!(config.api_key.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
