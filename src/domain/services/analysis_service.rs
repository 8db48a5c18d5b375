// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::analyze_request::{KeywordRequestDto, SentimentRequestDto};
use crate::application::dto::summarize_request::{BatchSummarizeRequestDto, SummarizeRequestDto};
use crate::application::dto::summarize_response::{
    BatchItemDto, BatchSummarizeResponseDto, SummarizeResponseDto,
};
use crate::config::settings::Settings;
use crate::domain::models::sentiment::SentimentResult;
use crate::domain::models::summary::{SummaryResult, SummaryStyle};
use crate::domain::services::{keyword_service, sentiment_service, summary_service};
use crate::engines::traits::CompletionEngine;

/// 分析错误类型
///
/// 仅两类：验证错误（客户端原因，HTTP 400）与处理错误
/// （提供商或内部原因，HTTP 500）。不做重试。
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Processing(String),
}

/// 模型列表获取失败时的静态回退列表
const FALLBACK_MODELS: [&str; 3] = ["llama3-8b-8192", "llama3-70b-8192", "mixtral-8x7b-32768"];

/// 分析编排服务
///
/// 按 验证 → 摘要 → 情感分析（可选）→ 关键词提取（可选）的顺序
/// 组合各组件，将结果合并为单个响应对象。批量模式对每篇文本
/// 独立执行该序列，严格顺序处理，单篇失败只影响其自身的结果槽。
pub struct AnalysisService {
    engine: Arc<dyn CompletionEngine>,
    settings: Arc<Settings>,
}

impl AnalysisService {
    pub fn new(engine: Arc<dyn CompletionEngine>, settings: Arc<Settings>) -> Self {
        Self { engine, settings }
    }

    pub async fn summarize_with_analysis(
        &self,
        dto: SummarizeRequestDto,
    ) -> Result<SummarizeResponseDto, AnalysisError> {
        dto.validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;
        let text = required_text(dto.text.as_deref())?;
        let style = parse_style(dto.style.as_deref())?;

        let (summary, sentiment, keywords) = self
            .run_analysis(
                &text,
                dto.max_length,
                style,
                dto.include_sentiment.unwrap_or(true),
                dto.include_keywords.unwrap_or(true),
            )
            .await?;

        Ok(SummarizeResponseDto::from_analysis(
            summary, sentiment, keywords,
        ))
    }

    pub async fn batch_summarize(
        &self,
        dto: BatchSummarizeRequestDto,
    ) -> Result<BatchSummarizeResponseDto, AnalysisError> {
        dto.validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;

        let texts = dto
            .texts
            .as_deref()
            .ok_or_else(|| AnalysisError::Validation("No texts provided".to_string()))?;
        if texts.is_empty() {
            return Err(AnalysisError::Validation(
                "Texts must be a non-empty list".to_string(),
            ));
        }
        let limit = self.settings.analysis.max_batch_size;
        if texts.len() > limit {
            return Err(AnalysisError::Validation(format!(
                "Maximum {} texts allowed per batch",
                limit
            )));
        }

        let style = parse_style(dto.style.as_deref())?;
        let include_sentiment = dto.include_sentiment.unwrap_or(true);
        let include_keywords = dto.include_keywords.unwrap_or(true);

        // Strictly sequential; each slot isolates its own failure
        let mut results = Vec::with_capacity(texts.len());
        for (i, raw) in texts.iter().enumerate() {
            info!("Processing text {}/{}", i + 1, texts.len());
            let text = raw.trim();
            let item = if text.is_empty() {
                BatchItemDto::failed("Empty text provided")
            } else {
                match self
                    .run_analysis(text, dto.max_length, style, include_sentiment, include_keywords)
                    .await
                {
                    Ok((summary, sentiment, keywords)) => {
                        BatchItemDto::completed(summary, sentiment, keywords)
                    }
                    Err(e) => {
                        warn!("Batch item {} failed: {}", i + 1, e);
                        BatchItemDto::failed(e.to_string())
                    }
                }
            };
            results.push(item);
        }

        Ok(BatchSummarizeResponseDto {
            success: true,
            total_processed: results.len(),
            results,
        })
    }

    pub fn sentiment(&self, dto: SentimentRequestDto) -> Result<SentimentResult, AnalysisError> {
        dto.validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;
        let text = required_text(dto.text.as_deref())?;
        Ok(sentiment_service::analyze(&text, &self.settings.analysis))
    }

    pub fn keywords(&self, dto: KeywordRequestDto) -> Result<Vec<String>, AnalysisError> {
        dto.validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;
        let text = required_text(dto.text.as_deref())?;
        let max_keywords = dto
            .max_keywords
            .unwrap_or(self.settings.analysis.default_max_keywords);
        Ok(keyword_service::extract_keywords(&text, max_keywords))
    }

    /// 获取提供商的可用模型列表
    ///
    /// 提供商查询失败时回退到静态列表，附带当前配置的模型名称
    pub async fn available_models(&self) -> (Vec<String>, String) {
        let models = match self.engine.list_models().await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => {
                warn!("Provider returned no models, using fallback list");
                fallback_models()
            }
            Err(e) => {
                warn!("Failed to fetch models from provider: {}", e);
                fallback_models()
            }
        };
        (models, self.engine.model().to_string())
    }

    /// 服务能力报告
    pub fn stats(&self) -> Value {
        json!({
            "model_name": self.engine.model(),
            "available_styles": SummaryStyle::ALL,
            "features": [
                "Text Summarization",
                "Sentiment Analysis",
                "Keyword Extraction",
                "Batch Processing",
                "Multiple Output Styles"
            ],
            "sentiment_analysis": {
                "polarity_range": "(-1 to 1)",
                "subjectivity_range": "(0 to 1)",
                "supported_sentiments": ["positive", "negative", "neutral"],
                "thresholds": {
                    "positive": self.settings.analysis.positive_threshold,
                    "negative": self.settings.analysis.negative_threshold
                }
            }
        })
    }

    async fn run_analysis(
        &self,
        text: &str,
        max_length: Option<u32>,
        style: SummaryStyle,
        include_sentiment: bool,
        include_keywords: bool,
    ) -> Result<(SummaryResult, Option<SentimentResult>, Option<Vec<String>>), AnalysisError> {
        let summary = summary_service::summarize(self.engine.as_ref(), text, max_length, style).await?;
        let sentiment =
            include_sentiment.then(|| sentiment_service::analyze(text, &self.settings.analysis));
        let keywords = include_keywords.then(|| {
            keyword_service::extract_keywords(text, self.settings.analysis.default_max_keywords)
        });
        Ok((summary, sentiment, keywords))
    }
}

fn fallback_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}

fn required_text(text: Option<&str>) -> Result<String, AnalysisError> {
    let text = text.ok_or_else(|| AnalysisError::Validation("No text provided".to_string()))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::Validation("Empty text provided".to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_style(style: Option<&str>) -> Result<SummaryStyle, AnalysisError> {
    match style {
        None => Ok(SummaryStyle::default()),
        Some(s) => SummaryStyle::parse(s).ok_or_else(|| {
            AnalysisError::Validation(format!(
                "Invalid style. Must be one of: {}",
                SummaryStyle::ALL.join(", ")
            ))
        }),
    }
}
