mod common;

use common::TestApp;
use reqwest::Client;
use shadowtrace_backend::services::providers::mock::MockTextProvider;
use std::sync::Arc;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "shadowtrace-backend");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn(Arc::new(MockTextProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn readiness_check_reports_missing_credential() {
    let app = TestApp::spawn_without_credential(Arc::new(MockTextProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 503);
}
