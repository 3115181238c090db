//! Incoming generation requests and their validation.

use serde::Deserialize;

use crate::error::{GenerationError, Result};

/// Raw JSON body accepted by the generate endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequestBody {
    #[serde(default)]
    pub topic: Option<String>,
    /// Older clients send the topic as `content`; `topic` wins when both are set.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub samples: Option<SamplesInput>,
}

/// Samples arrive either as one newline-delimited block or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SamplesInput {
    Text(String),
    Lines(Vec<String>),
}

impl SamplesInput {
    fn into_lines(self) -> Vec<String> {
        let blocks = match self {
            SamplesInput::Text(text) => vec![text],
            SamplesInput::Lines(lines) => lines,
        };

        blocks
            .iter()
            .flat_map(|block| block.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A validated request: trimmed topic plus zero or more sample titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub samples: Vec<String>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, samples: Vec<String>) -> Result<Self> {
        let body = GenerateRequestBody {
            topic: Some(topic.into()),
            content: None,
            samples: Some(SamplesInput::Lines(samples)),
        };
        Self::validate(body)
    }

    pub fn validate(body: GenerateRequestBody) -> Result<Self> {
        let topic = [body.topic.as_deref(), body.content.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|topic| !topic.is_empty())
            .ok_or(GenerationError::MissingTopic)?
            .to_string();

        let samples = body
            .samples
            .map(SamplesInput::into_lines)
            .unwrap_or_default();

        Ok(Self { topic, samples })
    }

    /// Samples joined back into a single block, one per line.
    pub fn samples_text(&self) -> String {
        self.samples.join("\n")
    }
}
