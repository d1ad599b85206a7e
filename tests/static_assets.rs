mod common;

use std::time::Duration;

use common::spawn_app_with;
use wiremock::MockServer;

#[tokio::test]
async fn root_serves_index_html() {
    let assets = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(
        assets.path().join("index.html"),
        "<html><body>Flux</body></html>",
    )
    .expect("Failed to write index.html");

    let upstream = MockServer::start().await;
    let app = spawn_app_with(
        "hf_real_token",
        &upstream.uri(),
        Duration::from_secs(5),
        assets.path().to_path_buf(),
    )
    .await;

    let response = reqwest::Client::new()
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Flux"));
}

#[tokio::test]
async fn named_asset_is_served_by_path() {
    let assets = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(assets.path().join("script.js"), "console.log('ok');")
        .expect("Failed to write script.js");

    let upstream = MockServer::start().await;
    let app = spawn_app_with(
        "hf_real_token",
        &upstream.uri(),
        Duration::from_secs(5),
        assets.path().to_path_buf(),
    )
    .await;

    let response = reqwest::Client::new()
        .get(format!("{}/script.js", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let assets = tempfile::tempdir().expect("Failed to create temp dir");

    let upstream = MockServer::start().await;
    let app = spawn_app_with(
        "hf_real_token",
        &upstream.uri(),
        Duration::from_secs(5),
        assets.path().to_path_buf(),
    )
    .await;

    let response = reqwest::Client::new()
        .get(format!("{}/missing.css", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);
}
