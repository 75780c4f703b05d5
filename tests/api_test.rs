//! Integration tests for the health and catalog routes.

mod common;

use common::TestHarness;
use serde_json::Value;

#[tokio::test]
async fn health_check() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn videos_lists_storage_root() {
    let (h, addr) = TestHarness::with_server().await;
    h.write_asset("b.mp4", &[0u8; 2048]);
    h.write_asset("a.mkv", &[0u8; 512]);

    let resp = reqwest::get(format!("http://{addr}/videos")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let entries: Value = resp.json().await.unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["name"], "a.mkv");
    assert_eq!(entries[0]["size"], 512);
    assert_eq!(entries[0]["content_type"], "video/x-matroska");
    assert_eq!(entries[0]["url"], "/stream/a.mkv");

    assert_eq!(entries[1]["name"], "b.mp4");
    assert_eq!(entries[1]["size"], 2048);
    assert_eq!(entries[1]["url"], "/stream/b.mp4");
}

#[tokio::test]
async fn videos_empty_root() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/videos")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let entries: Value = resp.json().await.unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn not_found_error_body_is_json() {
    let (_h, addr) = TestHarness::with_server().await;

    let resp = reqwest::get(format!("http://{addr}/stream/missing.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "not_found");
    assert!(body["error"].as_str().unwrap().contains("missing.mp4"));
}
