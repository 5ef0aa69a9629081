use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("invalid request body: {0}")]
    JsonParseFailed(String),
    #[error("{0}")]
    NotFound(String),
    /// 세션이 없거나 세션에 사용자 정보가 없는 경우
    #[error("not logged in")]
    Unauthenticated,
    /// 로그인은 되어 있으나 관리자가 아닌 경우
    #[error("insufficient privilege")]
    Unauthorized,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("a session is already active, log out first")]
    SessionAlreadyActive,
    #[error("no active session")]
    NoActiveSession,
    #[error("failed to close the session: {0}")]
    SessionDestructionFailed(String),
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드 값
    pub fn error_label(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) | AppError::JsonParseFailed(_) => "Bad Request",
            AppError::NotFound(_) => "Not Found",
            AppError::Unauthenticated | AppError::InvalidCredentials => "Unauthorized",
            AppError::Unauthorized => "Forbidden",
            AppError::SessionAlreadyActive => "Session Already Active",
            AppError::NoActiveSession => "No Active Session",
            AppError::SessionDestructionFailed(_) => "Session Destruction Failed",
            AppError::InternalError(_) => "Internal Server Error",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::JsonParseFailed(_)
            | AppError::SessionAlreadyActive
            | AppError::NoActiveSession => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthenticated
            | AppError::Unauthorized
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::SessionDestructionFailed(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", message);
        } else {
            warn!(status = status.as_u16(), error = self.error_label(), "{}", message);
        }

        let body = ErrorResponse::new(status, message, self.error_label());

        (status, Json(body)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// 숫자가 아닌 경로 ID 등은 400으로 처리
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// 편의 함수들
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }

    /// 쓰기(생성/수정/삭제) 중 발생한 저장소 에러는 400으로 노출
    pub fn store_write(err: DbErr) -> Self {
        AppError::BadRequest(err.to_string())
    }

    /// 조회 중 발생한 저장소 에러는 500으로 노출
    pub fn store_read(err: DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}
