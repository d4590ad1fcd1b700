use std::sync::Arc;

use pytutor::MockLlm;

use super::common;

/// Preflight from the allow-listed origin is granted for POST.
#[tokio::test]
async fn e2e_preflight_allows_post_from_configured_origin() {
    let llm = Arc::new(MockLlm::replying("unused"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm)).await;

    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{url}/submit"))
        .header("Origin", common::TEST_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let allow_origin = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(allow_origin, common::TEST_ORIGIN);
    let allow_methods = resp
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allow_methods.contains("POST"), "{}", allow_methods);

    handle.abort();
}

/// A foreign origin gets no allow-origin header back.
#[tokio::test]
async fn e2e_preflight_from_other_origin_is_not_allowed() {
    let llm = Arc::new(MockLlm::replying("unused"));
    let (url, handle) = common::spawn_server(common::state_with_llm(llm)).await;

    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{url}/submit"))
        .header("Origin", "https://evil.example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert!(resp
        .headers()
        .get("access-control-allow-origin")
        .is_none());

    handle.abort();
}
