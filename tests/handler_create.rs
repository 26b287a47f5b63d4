mod common;

use kanade::domain::repositories::KeyValueStore;
use kanade::utils::key_allocator::HIRAGANA;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_create_random_key_default_length() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);

    let key = json["shortKey"].as_str().unwrap();
    assert_eq!(key.chars().count(), 4);
    assert!(key.chars().all(|c| HIRAGANA.contains(&c)));

    assert_eq!(
        json["shortUrlNative"],
        format!("https://{}/{}", common::NATIVE_HOST, key)
    );

    let ascii = json["shortUrlAscii"].as_str().unwrap();
    assert!(ascii.starts_with("https://xn--s7y.xn--tckwe/%E3%"));
    assert!(ascii.is_ascii());

    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_create_with_custom_length() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com", "length": 9 }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortKey"].as_str().unwrap().chars().count(), 9);
}

#[tokio::test]
async fn test_create_with_custom_key() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com/a b", "key": "すし" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortKey"], "すし");
    assert_eq!(json["shortUrlNative"], "https://短.コム/すし");
    assert_eq!(
        json["shortUrlAscii"],
        "https://xn--s7y.xn--tckwe/%E3%81%99%E3%81%97"
    );

    let stored = store.get("%E3%81%99%E3%81%97").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://example.com/a%20b"));
}

#[tokio::test]
async fn test_create_conflict_keeps_first_target() {
    let (server, store) = common::create_test_server();

    server
        .post("/api/short")
        .json(&json!({ "url": "https://first.com", "key": "taken" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://second.com", "key": "taken" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "success": false })
    );

    let stored = store.get("taken").await.unwrap();
    assert_eq!(stored.as_deref(), Some("https://first.com"));
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_length_boundaries() {
    let (server, _store) = common::create_test_server();

    for (length, accepted) in [(1, false), (2, true), (30, true), (31, false)] {
        let response = server
            .post("/api/short")
            .json(&json!({ "url": "https://example.com", "length": length }))
            .await;

        if accepted {
            response.assert_status(axum::http::StatusCode::CREATED);
        } else {
            response.assert_status_bad_request();
        }
    }
}

#[tokio::test]
async fn test_create_key_boundaries() {
    let (server, _store) = common::create_test_server();

    let cases = [
        ("x".to_string(), false),
        ("xy".to_string(), true),
        ("k".repeat(30), true),
        ("k".repeat(31), false),
    ];

    for (key, accepted) in cases {
        let response = server
            .post("/api/short")
            .json(&json!({ "url": "https://example.com", "key": key }))
            .await;

        if accepted {
            response.assert_status(axum::http::StatusCode::CREATED);
        } else {
            response.assert_status_bad_request();
        }
    }
}

#[tokio::test]
async fn test_create_reserved_key_rejected() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com", "key": "health" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_form_encoded() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/short")
        .form(&[("url", "https://example.com"), ("key", ""), ("length", "5")])
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["shortKey"].as_str().unwrap().chars().count(), 5);
}

#[tokio::test]
async fn test_create_form_custom_key() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/short")
        .form(&[("url", "https://example.com"), ("key", "ねこ")])
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["shortKey"], "ねこ");
}

#[tokio::test]
async fn test_create_store_unavailable() {
    let server = common::create_test_server_with(Arc::new(common::FailingStore));

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "store_unavailable"
    );
}

#[tokio::test(start_paused = true)]
async fn test_create_store_timeout() {
    let server = common::create_test_server_with(Arc::new(common::HangingStore));

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_create_undeserializable_json_body() {
    let (server, store) = common::create_test_server();

    let bodies = [
        json!({}),
        json!({ "url": "https://example.com", "length": "abc" }),
        json!({ "url": "https://example.com", "length": 2.5 }),
        json!({ "url": "https://example.com", "length": -3 }),
    ];

    for body in bodies {
        let response = server.post("/api/short").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error", "body: {}", body);
        assert!(json["error"]["details"]["reason"].is_string());
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_length_as_numeric_string() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/short")
        .json(&json!({ "url": "https://example.com", "length": "7" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["shortKey"]
            .as_str()
            .unwrap()
            .chars()
            .count(),
        7
    );
}

#[tokio::test]
async fn test_create_undeserializable_form_body() {
    let (server, store) = common::create_test_server();

    let forms: [&[(&str, &str)]; 2] = [
        &[("key", "ねこ")],
        &[("url", "https://example.com"), ("length", "abc")],
    ];

    for form in forms {
        let response = server.post("/short").form(&form).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }

    assert!(store.is_empty());
}
