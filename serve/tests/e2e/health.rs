use std::sync::Arc;

use pytutor::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_health_check_is_ok() {
    let llm = Arc::new(MockLlm::replying("unused"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm.clone())).await;

    let resp = reqwest::get(format!("{url}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Backend is running.");
    assert_eq!(llm.calls(), 0);

    handle.abort();
}

/// The probe does not depend on upstream health: a failing client changes
/// nothing.
#[tokio::test]
async fn e2e_health_check_with_failing_upstream_is_still_ok() {
    let llm = Arc::new(MockLlm::failing("down"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm)).await;

    let resp = reqwest::get(format!("{url}/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    handle.abort();
}
