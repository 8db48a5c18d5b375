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
use serde::{Deserialize, Serialize};

/// 摘要风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// 专业风格
    Professional,
    /// 口语化风格
    Casual,
    /// 要点列表风格
    BulletPoints,
    /// 技术风格
    Technical,
}

impl SummaryStyle {
    /// 所有合法的风格名称（请求中使用的字符串形式）
    pub const ALL: [&'static str; 4] = ["professional", "casual", "bullet_points", "technical"];

    /// 从请求字符串解析风格，未知名称返回None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "professional" => Some(SummaryStyle::Professional),
            "casual" => Some(SummaryStyle::Casual),
            "bullet_points" => Some(SummaryStyle::BulletPoints),
            "technical" => Some(SummaryStyle::Technical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => "professional",
            SummaryStyle::Casual => "casual",
            SummaryStyle::BulletPoints => "bullet_points",
            SummaryStyle::Technical => "technical",
        }
    }
}

impl Default for SummaryStyle {
    fn default() -> Self {
        SummaryStyle::Professional
    }
}

/// 摘要结果
///
/// 摘要文本来自外部提供商，其余为本地计算的元数据。
/// 结果仅在请求生命周期内存在，不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    /// 摘要文本
    pub summary: String,
    /// 原文词数
    pub original_length: usize,
    /// 摘要词数
    pub summary_length: usize,
    /// 压缩比 = 原文词数 / 摘要词数，保留两位小数
    pub compression_ratio: f64,
    /// 使用的模型名称
    pub model_used: String,
    /// 摘要风格
    pub style: SummaryStyle,
    /// 生成时间戳
    pub timestamp: DateTime<Utc>,
}
