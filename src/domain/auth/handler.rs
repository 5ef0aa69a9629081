use axum::{extract::State, Json};

use super::dto::{
    LoginRequest, LoginResponse, LogoutResponse, SessionStatusResponse, SuccessLoginResponse,
    SuccessLogoutResponse, SuccessSessionStatusResponse,
};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::auth::CurrentSession;
use crate::utils::error::AppError;
use crate::utils::extract::ApiJson;
use crate::utils::{BaseResponse, ErrorResponse};

/// 관리자 로그인 API
///
/// 성공 시 `sid` 세션 쿠키(HttpOnly)를 설정합니다.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = SuccessLoginResponse),
        (status = 400, description = "이미 로그인된 세션", body = ErrorResponse),
        (status = 401, description = "자격 증명 불일치", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    current: CurrentSession,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<BaseResponse<LoginResponse>>, AppError> {
    let result = AuthService::login(state.credentials.as_ref(), &current, req).await?;

    Ok(Json(BaseResponse::success(result).with_message("login successful")))
}

/// 로그아웃 API
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "로그아웃 성공", body = SuccessLogoutResponse),
        (status = 400, description = "활성 세션 없음", body = ErrorResponse),
        (status = 500, description = "세션 삭제 실패", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(current: CurrentSession) -> Result<Json<BaseResponse<LogoutResponse>>, AppError> {
    let result = AuthService::logout(&current).await?;

    Ok(Json(BaseResponse::success(result).with_message("logout successful")))
}

/// 세션 상태 조회 API
#[utoipa::path(
    get,
    path = "/auth/status",
    responses(
        (status = 200, description = "세션 상태", body = SuccessSessionStatusResponse)
    ),
    tag = "Auth"
)]
pub async fn status(current: CurrentSession) -> Json<BaseResponse<SessionStatusResponse>> {
    Json(BaseResponse::success(AuthService::status(&current)))
}
