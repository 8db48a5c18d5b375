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

/// 情感分析请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SentimentRequestDto {
    /// 待分析的文本
    pub text: Option<String>,
}

/// 关键词提取请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct KeywordRequestDto {
    /// 待提取关键词的文本
    pub text: Option<String>,
    /// 返回的关键词数量上限（默认10）
    #[validate(range(min = 1, max = 50, message = "Max keywords must be between 1 and 50"))]
    pub max_keywords: Option<usize>,
}
