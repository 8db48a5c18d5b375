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
use std::sync::Arc;
use tracing::debug;

use crate::application::dto::summarize_request::{BatchSummarizeRequestDto, SummarizeRequestDto};
use crate::application::dto::summarize_response::{BatchSummarizeResponseDto, SummarizeResponseDto};
use crate::domain::services::analysis_service::AnalysisService;
use crate::presentation::errors::ApiError;

pub async fn summarize(
    Extension(service): Extension<Arc<AnalysisService>>,
    Json(payload): Json<SummarizeRequestDto>,
) -> Result<Json<SummarizeResponseDto>, ApiError> {
    debug!("Summarize request received");
    let response = service.summarize_with_analysis(payload).await?;
    Ok(Json(response))
}

pub async fn batch_summarize(
    Extension(service): Extension<Arc<AnalysisService>>,
    Json(payload): Json<BatchSummarizeRequestDto>,
) -> Result<Json<BatchSummarizeResponseDto>, ApiError> {
    debug!("Batch summarize request received");
    let response = service.batch_summarize(payload).await?;
    Ok(Json(response))
}
