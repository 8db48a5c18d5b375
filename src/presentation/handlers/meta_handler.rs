// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Extension;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::services::analysis_service::AnalysisService;

pub async fn models(Extension(service): Extension<Arc<AnalysisService>>) -> Json<Value> {
    let (models, current_model) = service.available_models().await;
    Json(json!({
        "success": true,
        "models": models,
        "current_model": current_model
    }))
}

pub async fn stats(Extension(service): Extension<Arc<AnalysisService>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "stats": service.stats()
    }))
}
