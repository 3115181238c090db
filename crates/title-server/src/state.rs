use std::sync::Arc;

use title_core::{Credential, FavoriteStore, GenerationStrategy, MockStrategy};
use title_llm::{DeepSeekClient, LiveStrategy};

use crate::config::ServerConfig;
use crate::session::{HeaderSessionResolver, SessionResolver};

/// Where the model-provider key comes from.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> Credential;
}

/// Reads an environment variable each time it is asked.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn credential(&self) -> Credential {
        Credential::from_raw(std::env::var(&self.var).ok())
    }
}

pub struct StaticCredential(Credential);

impl StaticCredential {
    pub fn new(raw: Option<String>) -> Self {
        Self(Credential::from_raw(raw))
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> Credential {
        self.0.clone()
    }
}

pub struct AppState {
    pub config: ServerConfig,
    pub http: reqwest::Client,
    pub credentials: Arc<dyn CredentialSource>,
    pub sessions: Arc<dyn SessionResolver>,
    pub favorites: FavoriteStore,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.llm_timeout)
            .build()?;

        let credentials: Arc<dyn CredentialSource> = match &config.api_key {
            Some(key) => Arc::new(StaticCredential::new(Some(key.clone()))),
            None => Arc::new(EnvCredential::new(config.api_key_env.clone())),
        };
        let sessions: Arc<dyn SessionResolver> =
            Arc::new(HeaderSessionResolver::new(config.session_header.clone()));

        Ok(Self {
            config,
            http,
            credentials,
            sessions,
            favorites: FavoriteStore::new(),
        })
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_session_resolver(mut self, sessions: Arc<dyn SessionResolver>) -> Self {
        self.sessions = sessions;
        self
    }

    /// Test mode unless a usable key is configured right now.
    pub fn select_strategy(&self) -> Box<dyn GenerationStrategy> {
        match self.credentials.credential().api_key() {
            Some(api_key) => {
                let client = DeepSeekClient::new(api_key)
                    .with_client(self.http.clone())
                    .with_base_url(self.config.llm_base_url.clone())
                    .with_model(self.config.model.clone());
                Box::new(LiveStrategy::new(client).with_prompt_style(self.config.prompt_style))
            }
            None => Box::new(MockStrategy::new(self.config.mock_delay)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use title_core::{GenerationMode, PLACEHOLDER_API_KEY};

    fn state_with(raw: Option<&str>) -> AppState {
        AppState::new(ServerConfig::default())
            .unwrap()
            .with_credentials(Arc::new(StaticCredential::new(raw.map(str::to_string))))
    }

    #[test]
    fn missing_key_selects_test_mode() {
        assert_eq!(state_with(None).select_strategy().mode(), GenerationMode::Test);
    }

    #[test]
    fn placeholder_key_selects_test_mode() {
        assert_eq!(
            state_with(Some(PLACEHOLDER_API_KEY)).select_strategy().mode(),
            GenerationMode::Test
        );
    }

    #[test]
    fn real_key_selects_live_mode() {
        assert_eq!(
            state_with(Some("sk-real")).select_strategy().mode(),
            GenerationMode::Live
        );
    }

    #[test]
    fn env_credential_reads_variable_on_each_call() {
        let var = "TITLE_SERVER_TEST_KEY_ROTATION";
        let source = EnvCredential::new(var);

        std::env::remove_var(var);
        assert!(!source.credential().is_configured());

        std::env::set_var(var, "sk-rotated");
        assert_eq!(source.credential().api_key(), Some("sk-rotated"));

        std::env::remove_var(var);
    }
}
