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

use digestrs::config::settings::Settings;
use digestrs::domain::services::analysis_service::AnalysisService;
use digestrs::engines::chat_engine::ChatCompletionEngine;
use digestrs::engines::traits::CompletionEngine;
use digestrs::presentation::routes;
use digestrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting digestrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    if settings.provider.api_key.is_none() {
        warn!("No provider API key configured; summarization requests will fail");
    }

    // 3. Initialize completion engine
    let engine: Arc<dyn CompletionEngine> =
        Arc::new(ChatCompletionEngine::new(&settings.provider)?);
    info!(
        "Completion engine initialized (engine: {}, model: {})",
        engine.name(),
        settings.provider.model
    );

    // 4. Initialize analysis service
    let service = Arc::new(AnalysisService::new(engine, settings.clone()));

    // 5. Start HTTP server
    let app = routes::app(service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
