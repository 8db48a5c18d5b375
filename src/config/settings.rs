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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、补全提供商和文本分析的所有配置项。
/// 进程启动时构造一次，通过依赖注入传递给请求处理器。
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 补全提供商配置
    pub provider: ProviderSettings,
    /// 文本分析配置
    pub analysis: AnalysisSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 补全提供商配置设置
#[derive(Debug, Deserialize)]
pub struct ProviderSettings {
    /// 提供商API密钥
    pub api_key: Option<String>,
    /// 使用的模型名称
    pub model: String,
    /// API基础URL（OpenAI兼容）
    pub api_base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 采样温度
    pub temperature: f64,
    /// 单次补全的最大令牌数
    pub max_tokens: u32,
}

/// 文本分析配置设置
#[derive(Debug, Deserialize)]
pub struct AnalysisSettings {
    /// 正面情感阈值：极性大于该值判定为positive
    pub positive_threshold: f64,
    /// 负面情感阈值：极性小于该值判定为negative
    pub negative_threshold: f64,
    /// 默认关键词数量上限
    pub default_max_keywords: usize,
    /// 单次批量请求的文本数量上限
    pub max_batch_size: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default provider settings
            .set_default("provider.model", "llama3-8b-8192")?
            .set_default("provider.api_base_url", "https://api.groq.com/openai/v1")?
            .set_default("provider.timeout_secs", 30)?
            .set_default("provider.temperature", 0.3)?
            .set_default("provider.max_tokens", 1024)?
            // Default analysis settings
            .set_default("analysis.positive_threshold", 0.1)?
            .set_default("analysis.negative_threshold", -0.1)?
            .set_default("analysis.default_max_keywords", 10)?
            .set_default("analysis.max_batch_size", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DIGESTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
