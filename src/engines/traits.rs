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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned error: {status} - {message}")]
    Provider { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// 补全引擎接口
///
/// 对外部聊天补全服务的抽象。实现必须是无状态的
/// （除持有凭证与配置外），可在请求间长期复用。
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// 发送一轮对话补全请求，返回助手消息文本
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, EngineError>;

    /// 列出提供商的可用模型
    async fn list_models(&self) -> Result<Vec<String>, EngineError>;

    /// 当前配置的模型名称
    fn model(&self) -> &str;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
