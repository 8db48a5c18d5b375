// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 情感分析服务（sentiment_service）：基于固定词典的词级情感评分
/// - 关键词服务（keyword_service）：基于词频的关键词提取
/// - 摘要服务（summary_service）：构造指令并调用外部补全引擎
/// - 分析编排服务（analysis_service）：组合以上组件处理单篇与批量请求
pub mod analysis_service;
pub mod keyword_service;
pub mod sentiment_service;
pub mod summary_service;
