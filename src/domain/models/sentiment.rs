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

use serde::{Deserialize, Serialize};

/// 情感倾向标签
///
/// 由极性值按阈值策略映射得到的离散标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// 正面情感
    Positive,
    /// 负面情感
    Negative,
    /// 中性情感
    Neutral,
}

impl SentimentLabel {
    /// 标签对应的表情符号
    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😞",
            SentimentLabel::Neutral => "😐",
        }
    }

    /// 标签对应的前端展示颜色
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "success",
            SentimentLabel::Negative => "danger",
            SentimentLabel::Neutral => "secondary",
        }
    }
}

/// 情感分析结果
///
/// 包含极性、主观性、离散标签以及可读描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    /// 极性值，范围 [-1, 1]
    pub polarity: f64,
    /// 主观性值，范围 [0, 1]
    pub subjectivity: f64,
    /// 情感标签
    pub sentiment: SentimentLabel,
    /// 表情符号
    pub emoji: String,
    /// 展示颜色
    pub color: String,
    /// 置信度，等于极性的绝对值
    pub confidence: f64,
    /// 可读描述
    pub description: String,
}
