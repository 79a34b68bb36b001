//! HTTP API Integration Tests
//!
//! Runs the reqwest clients against a local mock server.

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::domain::{Column, TaskDraft};
use crate::engine::BoardEngine;
use crate::error::{ClientError, ErrorKind};

fn record(id: &str, title: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": "",
        "status": status,
        "createdAt": "2024-05-01T10:00:00.000Z",
        "__v": 0
    })
}

async fn setup() -> (MockServer, HttpTaskApi) {
    let server = MockServer::start().await;
    let config = ApiConfig::new(server.uri()).expect("mock uri is a valid base url");
    let api = HttpTaskApi::new(config, SessionContext::new("tok"));
    (server, api)
}

#[tokio::test]
async fn test_list_sends_bearer_and_decodes() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record("1", "Write spec", "To Do"),
            record("2", "Ship", "Done"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = api.list().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].status, Column::Done);
}

#[tokio::test]
async fn test_create_posts_without_id() {
    let (server, api) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({"title": "A", "description": "", "status": "To Do"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(record("9", "A", "To Do")))
        .expect(1)
        .mount(&server)
        .await;

    let payload = TaskPayload::from(&TaskDraft::new("A"));
    let created = api.create(&payload).await.unwrap();
    assert_eq!(created.id.as_str(), "9");
}

#[tokio::test]
async fn test_update_puts_to_task_path() {
    let (server, api) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/abc123"))
        .and(body_partial_json(json!({"_id": "abc123", "status": "In Progress"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(record("abc123", "A", "In Progress")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = TaskDraft {
        id: Some(TaskId::new("abc123")),
        ..TaskDraft::new("A").with_status(Column::InProgress)
    };
    let updated = api
        .update(&TaskId::new("abc123"), &TaskPayload::from(&draft))
        .await
        .unwrap();
    assert_eq!(updated.status, Column::InProgress);
}

#[tokio::test]
async fn test_delete() {
    let (server, api) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    api.delete(&TaskId::new("abc123")).await.unwrap();
}

#[tokio::test]
async fn test_status_mapping() {
    for (status, kind) in [(401, ErrorKind::Auth), (403, ErrorKind::Auth), (500, ErrorKind::Server)] {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"message": "nope"})))
            .mount(&server)
            .await;

        let err = api.list().await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {}", status);
        assert!(err.to_string().contains("nope"));
    }
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_id": "1"}])))
        .mount(&server)
        .await;

    assert_eq!(api.list().await.unwrap_err().kind(), ErrorKind::Server);
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let config = ApiConfig::new("http://127.0.0.1:1").unwrap();
    let api = HttpTaskApi::new(config, SessionContext::new("tok"));
    assert_eq!(api.list().await.unwrap_err().kind(), ErrorKind::Network);
}

#[tokio::test]
async fn test_engine_over_http_move_failure() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([record("1", "A", "To Do")])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
        .mount(&server)
        .await;

    let engine = BoardEngine::new(api);
    engine.refresh().await.unwrap();
    let before = engine.board();

    let err = engine.move_task(&TaskId::new("1"), Column::Done).await.unwrap_err();
    assert_eq!(err, ClientError::Server("HTTP 500: db down".to_string()));
    assert_eq!(engine.board(), before);
}

#[tokio::test]
async fn test_register_expects_created() {
    let server = MockServer::start().await;
    let auth = HttpAuthApi::new(ApiConfig::new(server.uri()).unwrap());
    Mock::given(method("POST"))
        .and(path("/api/users/register"))
        .and(body_json(json!({"name": "Ada Lovelace", "email": "ada@example.com", "password": "engine1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "User registered"})))
        .expect(1)
        .mount(&server)
        .await;

    let message = auth
        .register(&RegisterRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine1".into(),
        })
        .await
        .unwrap();
    assert_eq!(message, "User registered");
}

#[tokio::test]
async fn test_login_returns_session() {
    let server = MockServer::start().await;
    let auth = HttpAuthApi::new(ApiConfig::new(server.uri()).unwrap());
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/google"))
        .and(body_json(json!({"name": "Ada", "email": "ada@example.com", "password": "uid-7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-2"})))
        .mount(&server)
        .await;

    let session = auth
        .login(&Credentials {
            email: "ada@example.com".into(),
            password: "engine1".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.token(), "jwt-1");

    let identity = GoogleIdentity {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        uid: "uid-7".into(),
    };
    assert_eq!(auth.google_login(&identity).await.unwrap().token(), "jwt-2");
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    let auth = HttpAuthApi::new(ApiConfig::new(server.uri()).unwrap());
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let err = auth
        .login(&Credentials {
            email: "ada@example.com".into(),
            password: "wrong!".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_auth());
    assert!(matches!(
        err,
        ClientError::Auth { status: Some(401), ref message } if message == "Invalid credentials"
    ));
}
