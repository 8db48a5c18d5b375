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
use validator::Validate;

/// 摘要请求数据传输对象
///
/// 封装单篇文本摘要请求的参数。text为必填项（缺失或空白在服务层校验），
/// 其余为可选项并带有默认值。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SummarizeRequestDto {
    /// 待摘要的文本
    pub text: Option<String>,
    /// 期望的摘要长度（词数）
    #[validate(range(
        min = 10,
        max = 1000,
        message = "Max length must be between 10 and 1000 words"
    ))]
    pub max_length: Option<u32>,
    /// 摘要风格名称（professional/casual/bullet_points/technical）
    pub style: Option<String>,
    /// 是否附带情感分析（默认true）
    pub include_sentiment: Option<bool>,
    /// 是否附带关键词提取（默认true）
    pub include_keywords: Option<bool>,
}

/// 批量摘要请求数据传输对象
///
/// 最多接受10篇文本，逐篇顺序处理，单篇失败不影响其他条目
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct BatchSummarizeRequestDto {
    /// 待摘要的文本列表
    pub texts: Option<Vec<String>>,
    /// 期望的摘要长度（词数），对所有条目生效
    #[validate(range(
        min = 10,
        max = 1000,
        message = "Max length must be between 10 and 1000 words"
    ))]
    pub max_length: Option<u32>,
    /// 摘要风格名称
    pub style: Option<String>,
    /// 是否附带情感分析（默认true）
    pub include_sentiment: Option<bool>,
    /// 是否附带关键词提取（默认true）
    pub include_keywords: Option<bool>,
}
