// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{mount_chat_completion, mount_model_list, test_app};

#[tokio::test]
async fn test_summarize_returns_summary_with_analysis() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "A concise summary of the document.").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/summarize")
        .json(&json!({
            "text": "I love this wonderful product. It works great and the team is amazing."
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["summary"], "A concise summary of the document.");
    assert_eq!(body["metadata"]["model_used"], "llama3-8b-8192");
    assert_eq!(body["metadata"]["style"], "professional");
    assert_eq!(body["metadata"]["original_length"], 13);
    assert_eq!(body["metadata"]["summary_length"], 6);
    assert_eq!(body["metadata"]["compression_ratio"], 2.17);
    assert_eq!(body["sentiment_analysis"]["sentiment"], "positive");
    assert!(body["keywords"].as_array().unwrap().len() <= 10);
}

#[tokio::test]
async fn test_summarize_respects_include_flags() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "Short summary.").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/summarize")
        .json(&json!({
            "text": "A plain description of an ordinary workflow.",
            "include_sentiment": false,
            "include_keywords": false
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body.get("sentiment_analysis").is_none());
    assert!(body.get("keywords").is_none());
}

#[tokio::test]
async fn test_summarize_rejects_out_of_range_max_length() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    for invalid in [5, 1500] {
        let response = server
            .post("/api/summarize")
            .json(&json!({ "text": "A valid document.", "max_length": invalid }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("between 10 and 1000"));
    }
}

#[tokio::test]
async fn test_summarize_rejects_unknown_style() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/summarize")
        .json(&json!({ "text": "A valid document.", "style": "poetic" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Invalid style"));
}

#[tokio::test]
async fn test_summarize_accepts_every_documented_style() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "Styled summary.").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    for style in ["professional", "casual", "bullet_points", "technical"] {
        let response = server
            .post("/api/summarize")
            .json(&json!({ "text": "A valid document.", "style": style }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["metadata"]["style"], style);
    }
}

#[tokio::test]
async fn test_summarize_rejects_missing_and_blank_text() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server.post("/api/summarize").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No text provided");

    let response = server
        .post("/api/summarize")
        .json(&json!({ "text": "   " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Empty text provided");
}

#[tokio::test]
async fn test_provider_failure_maps_to_internal_error() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&provider)
        .await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/summarize")
        .json(&json!({ "text": "A valid document." }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to summarize text"));
}

#[tokio::test]
async fn test_empty_provider_summary_maps_to_internal_error() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/summarize")
        .json(&json!({ "text": "A valid document." }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("empty summary"));
}

#[tokio::test]
async fn test_batch_processes_items_independently() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "Batch summary.").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/batch-summarize")
        .json(&json!({ "texts": ["First valid document.", "   "] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total_processed"], 2);
    assert_eq!(body["results"][0]["summary"], "Batch summary.");
    assert_eq!(body["results"][1]["error"], "Empty text provided");
}

#[tokio::test]
async fn test_batch_size_limits() {
    let provider = MockServer::start().await;
    mount_chat_completion(&provider, "Batch summary.").await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let eleven: Vec<&str> = vec!["A valid document."; 11];
    let response = server
        .post("/api/batch-summarize")
        .json(&json!({ "texts": eleven }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Maximum 10 texts allowed per batch");

    let ten: Vec<&str> = vec!["A valid document."; 10];
    let response = server
        .post("/api/batch-summarize")
        .json(&json!({ "texts": ten }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_processed"], 10);

    let response = server
        .post("/api/batch-summarize")
        .json(&json!({ "texts": [] }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Texts must be a non-empty list");
}

#[tokio::test]
async fn test_sentiment_endpoint() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/sentiment")
        .json(&json!({ "text": "This release is terrible and the regressions are awful." }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["sentiment_analysis"]["sentiment"], "negative");
    assert_eq!(body["sentiment_analysis"]["emoji"], "😞");
    assert!(body["sentiment_analysis"]["polarity"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn test_keywords_endpoint() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server
        .post("/api/keywords")
        .json(&json!({
            "text": "pipeline pipeline schema registry",
            "max_keywords": 2
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["keywords"], json!(["pipeline", "schema"]));
}

#[tokio::test]
async fn test_models_endpoint_lists_provider_models() {
    let provider = MockServer::start().await;
    mount_model_list(&provider, &["llama3-8b-8192", "mixtral-8x7b-32768"]).await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server.get("/api/models").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["current_model"], "llama3-8b-8192");
    assert_eq!(
        body["models"],
        json!(["llama3-8b-8192", "mixtral-8x7b-32768"])
    );
}

#[tokio::test]
async fn test_models_endpoint_falls_back_when_provider_fails() {
    // No /models mock mounted: the provider answers 404
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server.get("/api/models").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["models"],
        json!(["llama3-8b-8192", "llama3-70b-8192", "mixtral-8x7b-32768"])
    );
}

#[tokio::test]
async fn test_stats_endpoint_reports_capabilities() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server.get("/api/stats").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["stats"]["model_name"], "llama3-8b-8192");
    assert_eq!(
        body["stats"]["available_styles"],
        json!(["professional", "casual", "bullet_points", "technical"])
    );
    assert_eq!(
        body["stats"]["sentiment_analysis"]["supported_sentiments"],
        json!(["positive", "negative", "neutral"])
    );
}

#[tokio::test]
async fn test_health_and_version_endpoints() {
    let provider = MockServer::start().await;
    let server = TestServer::new(test_app(&provider.uri())).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");

    let response = server.get("/v1/version").await;
    response.assert_status_ok();
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}
