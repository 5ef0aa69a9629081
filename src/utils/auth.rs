use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use tracing::debug;

use crate::domain::auth::credentials::CredentialVerifier;
use crate::session::SESSION_USER_KEY;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 요청에 연결된 현재 세션
///
/// 쿠키가 없거나, 알 수 없는(또는 만료된) 세션이면 `username`이 None입니다.
/// 이 추출기 자체는 실패하지 않으며 저장소 오류만 500으로 전달합니다.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub session: Session,
    pub username: Option<String>,
}

impl CurrentSession {
    /// 세션에 저장된 사용자 이름
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::internal_error("session layer is not installed"))?;

        let username = session
            .get::<String>(SESSION_USER_KEY)
            .await
            .map_err(|e| AppError::internal_error(format!("failed to load session: {}", e)))?;

        Ok(Self { session, username })
    }
}

/// 관리자 세션 가드
///
/// 변경 요청(생성/수정/삭제) 핸들러의 인자로 선언하면 핸들러 실행 전에 검사합니다.
/// - 세션 또는 사용자 이름 없음 → `Unauthenticated` (401)
/// - 관리자가 아닌 사용자 → `Unauthorized` (401)
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentSession::from_request_parts(parts, state).await?;

        let username = current.username.ok_or(AppError::Unauthenticated)?;

        if !state.credentials.is_privileged(&username) {
            debug!(username = %username, "Rejected non-admin session");
            return Err(AppError::Unauthorized);
        }

        let user = AdminUser { username };
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}
