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

use axum::extract::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::dto::analyze_request::KeywordRequestDto;
use crate::domain::services::analysis_service::AnalysisService;
use crate::presentation::errors::ApiError;

pub async fn keywords(
    Extension(service): Extension<Arc<AnalysisService>>,
    Json(payload): Json<KeywordRequestDto>,
) -> Result<Json<Value>, ApiError> {
    let keywords = service.keywords(payload)?;
    Ok(Json(json!({
        "success": true,
        "keywords": keywords
    })))
}
