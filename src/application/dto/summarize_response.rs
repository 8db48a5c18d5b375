// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::sentiment::SentimentResult;
use crate::domain::models::summary::{SummaryResult, SummaryStyle};

/// 摘要元数据
#[derive(Debug, Serialize)]
pub struct SummaryMetadataDto {
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
    pub model_used: String,
    pub style: SummaryStyle,
    pub timestamp: DateTime<Utc>,
}

/// 摘要响应数据传输对象
#[derive(Debug, Serialize)]
pub struct SummarizeResponseDto {
    pub success: bool,
    pub summary: String,
    pub metadata: SummaryMetadataDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl SummarizeResponseDto {
    pub fn from_analysis(
        summary: SummaryResult,
        sentiment_analysis: Option<SentimentResult>,
        keywords: Option<Vec<String>>,
    ) -> Self {
        Self {
            success: true,
            summary: summary.summary.clone(),
            metadata: SummaryMetadataDto {
                original_length: summary.original_length,
                summary_length: summary.summary_length,
                compression_ratio: summary.compression_ratio,
                model_used: summary.model_used,
                style: summary.style,
                timestamp: summary.timestamp,
            },
            sentiment_analysis,
            keywords,
        }
    }
}

/// 批量摘要中的单条结果
///
/// 成功条目为平铺的摘要字段，失败条目仅包含error字段
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchItemDto {
    Completed {
        summary: String,
        original_length: usize,
        summary_length: usize,
        compression_ratio: f64,
        model_used: String,
        style: SummaryStyle,
        timestamp: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sentiment_analysis: Option<SentimentResult>,
        #[serde(skip_serializing_if = "Option::is_none")]
        keywords: Option<Vec<String>>,
    },
    Failed {
        error: String,
    },
}

impl BatchItemDto {
    pub fn completed(
        summary: SummaryResult,
        sentiment_analysis: Option<SentimentResult>,
        keywords: Option<Vec<String>>,
    ) -> Self {
        BatchItemDto::Completed {
            summary: summary.summary,
            original_length: summary.original_length,
            summary_length: summary.summary_length,
            compression_ratio: summary.compression_ratio,
            model_used: summary.model_used,
            style: summary.style,
            timestamp: summary.timestamp,
            sentiment_analysis,
            keywords,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        BatchItemDto::Failed {
            error: error.into(),
        }
    }
}

/// 批量摘要响应数据传输对象
#[derive(Debug, Serialize)]
pub struct BatchSummarizeResponseDto {
    pub success: bool,
    pub results: Vec<BatchItemDto>,
    pub total_processed: usize,
}
