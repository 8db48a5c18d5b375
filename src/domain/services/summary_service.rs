// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;

use crate::domain::models::summary::{SummaryResult, SummaryStyle};
use crate::domain::services::analysis_service::AnalysisError;
use crate::engines::traits::CompletionEngine;

/// 摘要系统提示词，随每次补全请求发送
pub(crate) const SYSTEM_PROMPT: &str = "You are a professional text summarizer with analytical capabilities. Your task is to:
1. Read the provided text carefully
2. Extract the key points and main ideas
3. Create a concise, coherent summary
4. Maintain the original meaning while reducing length
5. Use clear, professional language
6. Be aware of the emotional tone and context

Keep summaries informative but concise.";

/// 生成摘要
///
/// 构造嵌入风格与长度约束的自然语言指令，调用外部补全引擎，
/// 并在本地计算词数与压缩比元数据。
///
/// # 错误
///
/// * 引擎传输或提供商错误被包装为 `AnalysisError::Processing`
/// * 提供商返回空摘要时返回 `AnalysisError::Processing`（避免压缩比除零）
pub async fn summarize(
    engine: &dyn CompletionEngine,
    text: &str,
    max_length: Option<u32>,
    style: SummaryStyle,
) -> Result<SummaryResult, AnalysisError> {
    let instruction = build_instruction(text, max_length, style);

    let summary = engine
        .chat(SYSTEM_PROMPT, &instruction)
        .await
        .map_err(|e| AnalysisError::Processing(format!("Failed to summarize text: {}", e)))?;

    let original_length = word_count(text);
    let summary_length = word_count(&summary);
    if summary_length == 0 {
        return Err(AnalysisError::Processing(
            "Provider returned an empty summary".to_string(),
        ));
    }

    Ok(SummaryResult {
        compression_ratio: round2(original_length as f64 / summary_length as f64),
        summary,
        original_length,
        summary_length,
        model_used: engine.model().to_string(),
        style,
        timestamp: Utc::now(),
    })
}

/// 构造摘要指令
///
/// 将长度约束与风格子句拼入固定模板，原文附在指令末尾
pub(crate) fn build_instruction(text: &str, max_length: Option<u32>, style: SummaryStyle) -> String {
    let mut prompt = String::from("Please summarize the following text");

    if let Some(words) = max_length {
        prompt.push_str(&format!(" in approximately {} words", words));
    }

    match style {
        SummaryStyle::BulletPoints => prompt.push_str(" using bullet points"),
        SummaryStyle::Casual => prompt.push_str(" in a casual, conversational tone"),
        SummaryStyle::Technical => {
            prompt.push_str(" focusing on technical details and terminology")
        }
        SummaryStyle::Professional => prompt.push_str(" in a professional tone"),
    }

    prompt.push_str(&format!(":\n\n{}", text));
    prompt
}

/// 按空白切分统计词数
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
