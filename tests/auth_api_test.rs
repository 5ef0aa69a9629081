//! 인증 API 통합 테스트
//!
//! - POST /auth/login, POST /auth/logout, GET /auth/status
//! - 관리자 세션 가드 (401 Unauthorized / Forbidden)

mod common;

use std::collections::HashMap;

use async_trait::async_trait;
use aula_server::app;
use aula_server::config::{AppConfig, MAX_SESSION_TTL_SECS};
use aula_server::session::MemoryStore;
use axum::http::{header, Method, StatusCode};
use common::{login_as_admin, send, session_cookie, test_app, test_state};
use serde_json::json;
use time::{Duration, OffsetDateTime};
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

/// 삭제만 실패하는 세션 저장소
#[derive(Debug, Clone, Default)]
struct UndeletableStore {
    inner: MemoryStore,
}

#[async_trait]
impl SessionStore for UndeletableStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.inner.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.inner.save(record).await
    }

    async fn load(&self, id: &Id) -> session_store::Result<Option<Record>> {
        self.inner.load(id).await
    }

    async fn delete(&self, _id: &Id) -> session_store::Result<()> {
        Err(session_store::Error::Backend("disk unavailable".to_string()))
    }
}

fn set_cookie_header(response: &common::TestResponse) -> String {
    response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn status_should_be_anonymous_without_cookie() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/auth/status", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!({ "authenticated": false }));
}

#[tokio::test]
async fn login_should_set_http_only_cookie_and_authenticate() {
    // Arrange
    let app = test_app().await;

    // Act
    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "12345678" })),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "login successful");
    assert_eq!(response.body["data"]["username"], "admin");

    let set_cookie = set_cookie_header(&response);
    assert!(set_cookie.starts_with("sid="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(!set_cookie.contains("Secure"));

    let cookie = session_cookie(&response).unwrap();
    let status = send(&app, Method::GET, "/auth/status", Some(&cookie), None).await;
    assert_eq!(
        status.body["data"],
        json!({ "authenticated": true, "username": "admin" })
    );
}

#[tokio::test]
async fn second_login_on_active_session_should_be_rejected() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    // Act
    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(&cookie),
        Some(json!({ "username": "admin", "password": "12345678" })),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Session Already Active");
}

#[tokio::test]
async fn wrong_password_should_be_unauthorized() {
    let app = test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn logout_should_end_the_session() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    // Act
    let response = send(&app, Method::POST, "/auth/logout", Some(&cookie), None).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "admin");
    assert!(set_cookie_header(&response).contains("Max-Age=0"));

    let status = send(&app, Method::GET, "/auth/status", Some(&cookie), None).await;
    assert_eq!(status.body["data"]["authenticated"], false);

    let mutation = send(
        &app,
        Method::POST,
        "/teams",
        Some(&cookie),
        Some(json!({ "name": "Tarde FC", "country": "España" })),
    )
    .await;
    assert_eq!(mutation.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_session_should_be_bad_request() {
    let app = test_app().await;

    let response = send(&app, Method::POST, "/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No Active Session");
}

#[tokio::test]
async fn unknown_session_cookie_should_be_treated_as_anonymous() {
    let app = test_app().await;
    let cookie = format!("sid={}", Id::default());

    let response = send(&app, Method::DELETE, "/players/1", Some(&cookie), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "not logged in");
}

#[tokio::test]
async fn non_admin_session_should_be_forbidden() {
    // Arrange
    let store = MemoryStore::default();
    let record = Record {
        id: Id::default(),
        data: HashMap::from([("username".to_string(), json!("guest"))]),
        expiry_date: OffsetDateTime::now_utc() + Duration::hours(1),
    };
    store.save(&record).await.unwrap();
    let app = app(test_state(AppConfig::for_tests()).await, store);

    // Act
    let response = send(
        &app,
        Method::POST,
        "/recetas",
        Some(&format!("sid={}", record.id)),
        Some(json!({ "name": "Prohibida", "description": "No" })),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Forbidden");
    assert_eq!(response.body["message"], "insufficient privilege");
}

#[tokio::test]
async fn failed_session_destruction_should_keep_the_session() {
    // Arrange
    let app = app(
        test_state(AppConfig::for_tests()).await,
        UndeletableStore::default(),
    );
    let cookie = login_as_admin(&app).await;

    // Act
    let response = send(&app, Method::POST, "/auth/logout", Some(&cookie), None).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Session Destruction Failed");
    assert!(session_cookie(&response).is_none());

    let status = send(&app, Method::GET, "/auth/status", Some(&cookie), None).await;
    assert_eq!(
        status.body["data"],
        json!({ "authenticated": true, "username": "admin" })
    );
}

#[tokio::test]
async fn oversized_session_ttl_should_be_capped_on_login() {
    // Arrange
    let mut config = AppConfig::for_tests();
    config.session_ttl_secs = 100_000_000_000_000_000;
    let app = app(test_state(config).await, MemoryStore::default());

    // Act
    let response = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "12345678" })),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert!(set_cookie_header(&response).contains(&format!("Max-Age={}", MAX_SESSION_TTL_SECS)));
}
