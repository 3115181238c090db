use reqwest::Client;

use crate::error::{LLMError, Result};
use crate::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, SamplingParams};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Single-shot client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    sampling: SamplingParams,
}

impl DeepSeekClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            sampling: SamplingParams::default(),
        }
    }

    /// Reuse a shared connection pool (and its timeout settings).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn build_request(&self, messages: Vec<ChatMessage>) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            sampling: self.sampling,
            stream: false,
        }
    }

    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<ChatCompletionResponse> {
        let body = self.build_request(messages);

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        log::info!("Completion API responded with status {}", status);

        if !status.is_success() {
            let text = response.text().await?;
            log::error!("Completion API error body: {}", text);
            return Err(LLMError::Api { status, body: text });
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;
        Ok(completion)
    }
}
