//! Prompt construction for the title-writing model.

use title_core::GenerationRequest;

use crate::protocol::ChatMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptStyle {
    /// Instructions as a system message, samples and topic as a user message.
    #[default]
    Split,
    /// Everything folded into a single user message.
    Combined,
}

pub const SYSTEM_PROMPT: &str = "你是一名资深的小红书内容创作者，擅长从样本中提炼写作风格并创作吸引点击的标题。

任务：
1. 分析用户提供的样本标题：语气（正式或口语）、情绪强度、句式与长度、常用词汇与修辞、表情符号的使用习惯、目标读者。
2. 为新的主题创作 5 个风格相近、但结构和切入角度各不相同的标题。

要求：
- 5 个标题的开头和句式不能雷同，不要简单替换关键词，不要套用固定模板。
- 语言自然流畅，符合中文表达习惯，保持与样本相近的情绪强度。
- 每个标题 15-25 个字为宜。
- 样本使用了表情符号时可以适度使用，不要堆砌。

输出格式：
- 只输出 5 个标题，每行一个。
- 不要编号、序号、前缀符号或任何额外说明。";

const NO_SAMPLES: &str = "（未提供样本标题，请使用自然、有吸引力的小红书风格）";

fn user_prompt(request: &GenerationRequest) -> String {
    let samples = if request.samples.is_empty() {
        NO_SAMPLES.to_string()
    } else {
        request.samples_text()
    };

    format!(
        "请分析以下样本标题的写作风格：\n\n{samples}\n\n新的主题内容：\n{topic}\n\n\
         请基于样本风格为新主题创作 5 个标题，每个标题的表达角度和句式都要不同。",
        topic = request.topic
    )
}

pub fn build_messages(style: PromptStyle, request: &GenerationRequest) -> Vec<ChatMessage> {
    match style {
        PromptStyle::Split => vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_prompt(request)),
        ],
        PromptStyle::Combined => vec![ChatMessage::user(format!(
            "{SYSTEM_PROMPT}\n\n{}",
            user_prompt(request)
        ))],
    }
}
