use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_with_provider_name(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("provider").and_then(|v| v.as_str()), Some("elevenlabs"));
}

#[tokio::test]
async fn it_should_report_not_ready_without_credentials() {
    let ctx = TestContext::unconfigured().await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(
        body.get("reason").and_then(|v| v.as_str()),
        Some("missing required environment variable ELEVENLABS_API_KEY")
    );

    // Liveness is unaffected
    ctx.client
        .get("/health")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    first.assert_header_exists("x-request-id");

    let second = ctx.client.get("/health/ready").await.unwrap();
    second.assert_header_exists("x-request-id");

    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}
