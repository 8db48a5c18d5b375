// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::domain::services::analysis_service::AnalysisService;
use crate::presentation::handlers::{
    keyword_handler, meta_handler, sentiment_handler, summarize_handler,
};

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 分析编排服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app(service: Arc<AnalysisService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/api/summarize", post(summarize_handler::summarize))
        .route(
            "/api/batch-summarize",
            post(summarize_handler::batch_summarize),
        )
        .route("/api/sentiment", post(sentiment_handler::sentiment))
        .route("/api/keywords", post(keyword_handler::keywords))
        .route("/api/models", get(meta_handler::models))
        .route("/api/stats", get(meta_handler::stats));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(service))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
