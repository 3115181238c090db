use async_trait::async_trait;
use title_core::{
    extract_titles, GenerationError, GenerationMode, GenerationRequest, GenerationResult,
    GenerationStrategy, MIN_TITLES,
};

use crate::client::DeepSeekClient;
use crate::prompt::{build_messages, PromptStyle};

/// Live mode: one completion call, no retry, no fallback.
pub struct LiveStrategy {
    client: DeepSeekClient,
    prompt_style: PromptStyle,
}

impl LiveStrategy {
    pub fn new(client: DeepSeekClient) -> Self {
        Self {
            client,
            prompt_style: PromptStyle::default(),
        }
    }

    pub fn with_prompt_style(mut self, style: PromptStyle) -> Self {
        self.prompt_style = style;
        self
    }
}

#[async_trait]
impl GenerationStrategy for LiveStrategy {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Live
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> title_core::Result<GenerationResult> {
        let messages = build_messages(self.prompt_style, request);
        log::info!(
            "Calling completion API with model {} ({:?} prompt)",
            self.client.model(),
            self.prompt_style
        );

        let completion = self.client.complete(messages).await?;

        let content = completion
            .first_content()
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyGeneration)?;
        log::debug!("Generated content: {}", content);

        let titles = extract_titles(content);
        if titles.len() < MIN_TITLES {
            log::warn!("Only {} usable titles after filtering", titles.len());
            return Err(GenerationError::InsufficientResults {
                found: titles.len(),
            });
        }

        Ok(GenerationResult::live(titles, completion.usage))
    }
}
