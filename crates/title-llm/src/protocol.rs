//! OpenAI-compatible chat-completion wire types (non-streaming).

use serde::{Deserialize, Serialize};
use title_core::TokenUsage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling knobs. The defaults favour varied wording over repetition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: 800,
            top_p: 0.95,
            frequency_penalty: 0.8,
            presence_penalty: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub sampling: SamplingParams,
    pub stream: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<ResponseChoice>>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the model returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .content
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_flattens_sampling_params() {
        let request = ChatCompletionRequest {
            model: "deepseek-chat".to_string(),
            messages: vec![ChatMessage::system("s"), ChatMessage::user("u")],
            sampling: SamplingParams::default(),
            stream: false,
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["stream"], false);
        assert!((body["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
        assert!((body["presence_penalty"].as_f64().unwrap() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn response_with_content_and_usage() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "a\nb"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.first_content(), Some("a\nb"));
        assert_eq!(response.usage.unwrap().total_tokens, Some(21));
    }

    #[test]
    fn response_without_choices_has_no_content() {
        for json in [r#"{}"#, r#"{"choices": null}"#, r#"{"choices": []}"#] {
            let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
            assert_eq!(response.first_content(), None, "body: {json}");
        }
    }
}
