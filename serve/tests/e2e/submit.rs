use std::sync::Arc;

use pytutor::MockLlm;
use serde_json::json;

use super::common;

#[tokio::test]
async fn e2e_submit_known_question_succeeds() {
    let llm = Arc::new(MockLlm::replying("Hi,\n\nYour loop never prints.\n\nHappy Coding!"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .json(&json!({
            "questionId": "Q1",
            "query": "why is my output empty",
            "code": "word=input()"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["questionId"], "Q1");
    assert_eq!(body["status"], "success");
    assert!(!body["response"].as_str().unwrap().is_empty());
    assert_eq!(llm.calls(), 1);

    handle.abort();
}

#[tokio::test]
async fn e2e_submit_empty_field_is_400_and_model_is_never_called() {
    let llm = Arc::new(MockLlm::replying("never"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .json(&json!({"questionId": "", "query": "help", "code": "x=1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "All fields are required.");
    assert_eq!(llm.calls(), 0);

    handle.abort();
}

/// Unknown ids degrade instead of failing: the model is still called once.
#[tokio::test]
async fn e2e_submit_unknown_question_proceeds() {
    let llm = Arc::new(MockLlm::replying("ok"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .json(&json!({"questionId": "Q404", "query": "help", "code": "x=1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["questionId"], "Q404");
    assert_eq!(llm.calls(), 1);

    handle.abort();
}

#[tokio::test]
async fn e2e_submit_upstream_failure_is_502_with_error_text() {
    let llm = Arc::new(MockLlm::failing("connection refused"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm)).await;

    let resp = reqwest::Client::new()
        .post(format!("{url}/submit"))
        .json(&json!({"questionId": "Q1", "query": "help", "code": "x=1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = resp.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("connection refused"), "{}", detail);

    handle.abort();
}
