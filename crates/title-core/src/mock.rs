//! Test-mode title synthesis.
//!
//! Produces five titles from fixed templates, decorated according to a few
//! surface features of the samples. Used whenever no usable API key is
//! configured, so the rest of the pipeline can be exercised offline.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::request::GenerationRequest;
use crate::strategy::GenerationStrategy;
use crate::types::{GenerationMode, GenerationResult};

pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

const DEFAULT_KEYWORD: &str = "好物";

const PREFERRED_KEYWORDS: &[&str] = &[
    "面膜", "护肤", "美妆", "好物", "品牌", "产品", "方法", "技巧", "早起", "时间", "管理",
];

static CJK_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FAF}]{2,}").expect("Failed to compile keyword regex"));
static EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Extended_Pictographic}").expect("Failed to compile emoji regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SampleStyle {
    emoji: bool,
    exclamation: bool,
    personal: bool,
    sharing: bool,
}

impl SampleStyle {
    fn detect(samples: &str) -> Self {
        Self {
            emoji: EMOJI.is_match(samples),
            exclamation: samples.contains('！') || samples.contains('!'),
            personal: samples.contains('我'),
            sharing: samples.contains("分享") || samples.contains("推荐"),
        }
    }
}

fn main_keyword(topic: &str) -> &str {
    let keywords: Vec<&str> = CJK_WORD.find_iter(topic).map(|m| m.as_str()).collect();

    keywords
        .iter()
        .copied()
        .find(|word| PREFERRED_KEYWORDS.contains(word))
        .or_else(|| keywords.first().copied())
        .unwrap_or(DEFAULT_KEYWORD)
}

fn flag(enabled: bool, text: &str) -> &str {
    if enabled {
        text
    } else {
        ""
    }
}

/// Builds the five test-mode titles. Pure and deterministic.
pub fn synthesize_titles(samples: &str, topic: &str) -> Vec<String> {
    let style = SampleStyle::detect(samples);
    let keyword = main_keyword(topic);

    vec![
        // discovery
        format!(
            "真没想到，{keyword}居然能有这么好的效果{}",
            flag(style.emoji, "✨")
        ),
        // before/after
        format!(
            "用了{keyword}两周，前后对比太明显了{}",
            flag(style.exclamation, "！")
        ),
        // surprise
        format!(
            "{}{keyword}给了我太多惊喜，必须分享给大家",
            flag(style.emoji, "💕 ")
        ),
        // practical tip
        format!(
            "关于{keyword}的几个小心得，真的很实用{}",
            flag(style.emoji, "🌟")
        ),
        // recommendation
        format!(
            "{}一个超棒的{keyword}，{}姐妹们{}",
            if style.personal { "我发现" } else { "发现" },
            if style.sharing { "推荐给" } else { "分享给" },
            flag(style.emoji, "💖")
        ),
    ]
}

pub struct MockStrategy {
    delay: Duration,
}

impl MockStrategy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl GenerationStrategy for MockStrategy {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Test
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let titles = synthesize_titles(&request.samples_text(), &request.topic);
        log::debug!("Synthesized {} test-mode titles", titles.len());

        Ok(GenerationResult::test(titles))
    }
}
