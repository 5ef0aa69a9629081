use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 로그인 요청 DTO
///
/// 누락된 필드는 빈 문자열로 취급되어 자격 증명 불일치(401)가 됩니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "admin")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "12345678")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "admin")]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    #[schema(example = "admin")]
    pub username: String,
}

/// 현재 세션 상태
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// --- Swagger용 래핑 DTO ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLoginResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "login successful")]
    pub message: String,
    pub data: LoginResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLogoutResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "logout successful")]
    pub message: String,
    pub data: LogoutResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSessionStatusResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    pub data: SessionStatusResponse,
}
