// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::services::analysis_service::AnalysisError;

/// 应用错误类型
///
/// 封装分析层错误并映射为HTTP响应：验证错误返回400，
/// 处理错误返回500。所有错误统一序列化为
/// `{"success": false, "error": <message>}` 信封。
#[derive(Debug)]
pub struct ApiError(AnalysisError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AnalysisError::Validation(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.0.to_string()
        }));
        (status, body).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}
