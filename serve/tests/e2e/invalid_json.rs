use std::sync::Arc;

use pytutor::MockLlm;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_missing_field_is_422_with_detail() {
    let llm = Arc::new(MockLlm::replying("never"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    // "code" absent entirely: schema rejection, not the empty-field 400.
    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .json(&json!({"questionId": "Q1", "query": "help"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = resp.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Invalid input data:"), "{}", detail);
    assert_eq!(llm.calls(), 0);

    handle.abort();
}

#[tokio::test]
async fn e2e_malformed_body_is_422() {
    let llm = Arc::new(MockLlm::replying("never"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .header("content-type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    assert_eq!(llm.calls(), 0);

    handle.abort();
}
