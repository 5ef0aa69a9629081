//! 통합 테스트 공통 헬퍼
//!
//! 메모리 SQLite와 메모리 세션 저장소로 실제 라우터를 구성합니다.

#![allow(dead_code)]

use aula_server::config::{establish_connection, AppConfig};
use aula_server::session::MemoryStore;
use aula_server::{app, AppState};
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

pub async fn test_state(config: AppConfig) -> AppState {
    let db = establish_connection(&config).await.unwrap();
    AppState::new(db, config)
}

pub async fn test_app() -> Router {
    app(test_state(AppConfig::for_tests()).await, MemoryStore::default())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    into_test_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn into_test_response(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&bytes).to_string();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        body,
        text,
    }
}

/// 응답의 Set-Cookie에서 `sid=<값>` 부분만 추출
pub fn session_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("sid="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// 관리자 로그인 후 요청에 사용할 쿠키 반환
pub async fn login_as_admin(app: &Router) -> String {
    let response = send(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "admin", "password": "12345678" })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    session_cookie(&response).expect("login should set the sid cookie")
}
