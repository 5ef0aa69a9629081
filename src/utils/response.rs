use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// API 공통 응답 구조체
///
/// 형식:
/// ```json
/// {
///   "statusCode": 201,
///   "data": { ... },
///   "createdBy": "admin"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
}

impl<T: Serialize> BaseResponse<T> {
    fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: None,
            data,
            created_by: None,
            updated_by: None,
            deleted_by: None,
        }
    }

    /// 200 성공 응답 생성
    pub fn success(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    /// 201 생성 응답 (생성한 관리자 포함)
    pub fn created(data: T, created_by: impl Into<String>) -> Self {
        let mut response = Self::with_status(StatusCode::CREATED, Some(data));
        response.created_by = Some(created_by.into());
        response
    }

    /// 수정 응답 (수정한 관리자 포함)
    pub fn updated(data: T, updated_by: impl Into<String>) -> Self {
        let mut response = Self::success(data);
        response.updated_by = Some(updated_by.into());
        response
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl BaseResponse<()> {
    /// 삭제 응답: 본문 데이터 없이 메시지와 삭제한 관리자만 포함
    pub fn deleted(message: impl Into<String>, deleted_by: impl Into<String>) -> Self {
        let mut response = Self::with_status(StatusCode::OK, None).with_message(message);
        response.deleted_by = Some(deleted_by.into());
        response
    }
}

/// 에러 응답 구조체
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[schema(example = 404)]
    pub status_code: u16,
    pub message: String,
    #[schema(example = "Not Found")]
    pub error: String,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            error: error.into(),
        }
    }
}

/// 삭제 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    #[schema(example = 200)]
    pub status_code: u16,
    pub message: String,
    #[schema(example = "admin")]
    pub deleted_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_should_serialize_status_and_actor_in_camel_case() {
        let response = BaseResponse::created(serde_json::json!({ "id": 1 }), "admin");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["data"]["id"], 1);
        assert_eq!(json["createdBy"], "admin");
        assert!(json.get("updatedBy").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn deleted_should_omit_data() {
        let response = BaseResponse::deleted("team deleted", "admin");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["message"], "team deleted");
        assert_eq!(json["deletedBy"], "admin");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn error_response_should_carry_label() {
        let response = ErrorResponse::new(StatusCode::BAD_REQUEST, "bad id", "Bad Request");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["error"], "Bad Request");
    }
}
