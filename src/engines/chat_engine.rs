// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::settings::ProviderSettings;
use crate::engines::traits::{CompletionEngine, EngineError};

/// 聊天补全引擎
///
/// 基于reqwest实现的OpenAI兼容聊天补全客户端
///
/// # 配置
///
/// 通过 `ProviderSettings` 注入：
/// - `api_key` - 提供商API密钥
/// - `model` - 使用的模型名称
/// - `api_base_url` - API基础URL（默认指向Groq）
pub struct ChatCompletionEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    temperature: f64,
    max_tokens: u32,
}

impl ChatCompletionEngine {
    pub fn new(provider: &ProviderSettings) -> Result<Self, EngineError> {
        // One long-lived client per process; holds only connection state
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(provider.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: provider.api_key.clone(),
            model: provider.model.clone(),
            api_base_url: provider.api_base_url.trim_end_matches('/').to_string(),
            temperature: provider.temperature,
            max_tokens: provider.max_tokens,
        })
    }

    fn api_key(&self) -> Result<&str, EngineError> {
        self.api_key.as_deref().ok_or(EngineError::MissingApiKey)
    }
}

#[async_trait]
impl CompletionEngine for ChatCompletionEngine {
    /// 执行聊天补全
    ///
    /// # 参数
    ///
    /// * `system_prompt` - 系统提示词
    /// * `user_prompt` - 用户指令
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 助手消息文本
    /// * `Err(EngineError)` - 传输错误、提供商错误或响应格式错误
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, EngineError> {
        let api_key = self.api_key()?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "top_p": 1,
            "stream": false
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(EngineError::Provider { status, message });
        }

        let body: Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| EngineError::InvalidResponse("missing message content".to_string()))?;

        Ok(content.to_string())
    }

    async fn list_models(&self) -> Result<Vec<String>, EngineError> {
        let api_key = self.api_key()?;

        let url = format!("{}/models", self.api_base_url);
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(EngineError::Provider { status, message });
        }

        let body: Value = response.json().await?;
        let data = body["data"]
            .as_array()
            .ok_or_else(|| EngineError::InvalidResponse("missing model data".to_string()))?;

        Ok(data
            .iter()
            .filter_map(|model| model["id"].as_str().map(str::to_string))
            .collect())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &'static str {
        "chat_completion"
    }
}
