pub mod client;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod strategy;

pub use client::{DeepSeekClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::LLMError;
pub use prompt::{build_messages, PromptStyle};
pub use protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role, SamplingParams};
pub use strategy::LiveStrategy;
