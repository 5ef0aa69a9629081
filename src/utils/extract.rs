//! 거부(rejection) 응답을 `AppError` 형식으로 통일하는 추출기 래퍼
//!
//! axum 기본 추출기는 실패 시 평문 응답을 돌려주므로,
//! 잘못된 JSON 본문, 숫자가 아닌 경로 ID, 잘못된 쿼리 값도
//! `{statusCode, message, error}` 형태로 응답하도록 감쌉니다.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::AppError;

/// JSON 본문 추출기
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// 경로 파라미터 추출기
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// 쿼리 파라미터 추출기
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
