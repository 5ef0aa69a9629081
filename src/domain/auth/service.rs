use tracing::{info, warn};

use super::dto::{LoginRequest, LoginResponse, LogoutResponse, SessionStatusResponse};
use crate::domain::auth::credentials::CredentialVerifier;
use crate::session::SESSION_USER_KEY;
use crate::utils::auth::CurrentSession;
use crate::utils::error::AppError;

pub struct AuthService;

impl AuthService {
    /// 로그인
    ///
    /// 이미 사용자 정보가 있는 세션이면 거부합니다.
    /// 성공 시 매번 새 세션 ID로 저장되며, 기존 쿠키의 세션 레코드는 폐기합니다.
    pub async fn login(
        credentials: &dyn CredentialVerifier,
        current: &CurrentSession,
        req: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        if let Some(username) = current.username() {
            warn!(username, "Login attempted on an active session");
            return Err(AppError::SessionAlreadyActive);
        }

        let username = credentials
            .verify(&req.username, &req.password)
            .ok_or_else(|| {
                warn!(username = %req.username, "Login failed: invalid credentials");
                AppError::InvalidCredentials
            })?;

        // 기존 쿠키의 세션은 새 ID로 교체. 새 세션은 저장 시 ID가 발급됨
        if current.session.id().is_some() {
            current
                .session
                .cycle_id()
                .await
                .map_err(|e| AppError::internal_error(format!("failed to rotate session: {}", e)))?;
        }
        current
            .session
            .insert(SESSION_USER_KEY, &username)
            .await
            .map_err(|e| AppError::internal_error(format!("failed to store session: {}", e)))?;

        info!(username = %username, "Admin logged in");

        Ok(LoginResponse { username })
    }

    /// 로그아웃: 저장소의 세션 레코드를 삭제
    ///
    /// 삭제에 실패하면 세션은 그대로 유지됩니다.
    pub async fn logout(current: &CurrentSession) -> Result<LogoutResponse, AppError> {
        let Some(username) = current.username() else {
            return Err(AppError::NoActiveSession);
        };

        current
            .session
            .delete()
            .await
            .map_err(|e| AppError::SessionDestructionFailed(e.to_string()))?;
        // 빈 세션은 응답 시 쿠키 삭제로 이어짐
        current.session.clear().await;

        info!(username, "Admin logged out");

        Ok(LogoutResponse {
            username: username.to_string(),
        })
    }

    /// 현재 세션 상태 (항상 성공)
    pub fn status(current: &CurrentSession) -> SessionStatusResponse {
        match current.username() {
            Some(username) => SessionStatusResponse {
                authenticated: true,
                username: Some(username.to_string()),
            },
            None => SessionStatusResponse {
                authenticated: false,
                username: None,
            },
        }
    }
}
