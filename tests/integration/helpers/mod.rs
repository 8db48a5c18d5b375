// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use digestrs::config::settings::{AnalysisSettings, ProviderSettings, ServerSettings, Settings};
use digestrs::domain::services::analysis_service::AnalysisService;
use digestrs::engines::chat_engine::ChatCompletionEngine;
use digestrs::presentation::routes;

/// 指向模拟提供商的测试配置
pub fn test_settings(base_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        provider: ProviderSettings {
            api_key: Some("test-key".to_string()),
            model: "llama3-8b-8192".to_string(),
            api_base_url: base_url.to_string(),
            timeout_secs: 5,
            temperature: 0.3,
            max_tokens: 1024,
        },
        analysis: AnalysisSettings {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            default_max_keywords: 10,
            max_batch_size: 10,
        },
    }
}

/// 构建连接到模拟提供商的完整应用路由
pub fn test_app(base_url: &str) -> Router {
    let settings = Arc::new(test_settings(base_url));
    let engine =
        Arc::new(ChatCompletionEngine::new(&settings.provider).expect("engine should build"));
    let service = Arc::new(AnalysisService::new(engine, settings));
    routes::app(service)
}

/// 挂载返回固定摘要文本的聊天补全模拟端点
pub async fn mount_chat_completion(server: &MockServer, summary: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": summary },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 42, "completion_tokens": 12, "total_tokens": 54 }
        })))
        .mount(server)
        .await;
}

/// 挂载返回固定模型列表的模拟端点
pub async fn mount_model_list(server: &MockServer, ids: &[&str]) {
    let data: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "id": id, "object": "model" }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "object": "list", "data": data })),
        )
        .mount(server)
        .await;
}
