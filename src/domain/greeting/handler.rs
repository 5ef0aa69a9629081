use std::collections::HashMap;

use serde::Deserialize;
use utoipa::IntoParams;

use super::i18n::{translate, RequestLocale};
use crate::utils::error::AppError;
use crate::utils::extract::ApiQuery;

const DEFAULT_GREETING_NAME: &str = "Usuario";

/// 인사말 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GreetingQuery {
    /// 인사할 이름 (기본값: Usuario)
    pub name: Option<String>,
    /// 응답 언어 (es | en)
    pub lang: Option<String>,
}

/// 언어 선택용 쿼리 (문서화 전용)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangParam {
    /// 응답 언어 (es | en)
    pub lang: Option<String>,
}

/// HELLO 메시지
#[utoipa::path(
    get,
    path = "/",
    params(LangParam),
    responses((status = 200, description = "번역된 인사", body = String, content_type = "text/plain")),
    tag = "Greeting"
)]
pub async fn hello(RequestLocale(locale): RequestLocale) -> String {
    translate("HELLO", locale, &HashMap::new())
}

/// WELCOME 메시지
#[utoipa::path(
    get,
    path = "/welcome",
    params(LangParam),
    responses((status = 200, description = "번역된 환영 메시지", body = String, content_type = "text/plain")),
    tag = "Greeting"
)]
pub async fn welcome(RequestLocale(locale): RequestLocale) -> String {
    translate("WELCOME", locale, &HashMap::new())
}

/// GREETING 메시지 (`{name}` 치환)
#[utoipa::path(
    get,
    path = "/greeting",
    params(GreetingQuery),
    responses(
        (status = 200, description = "이름이 들어간 인사", body = String, content_type = "text/plain"),
        (status = 400, description = "잘못된 쿼리", body = crate::utils::ErrorResponse)
    ),
    tag = "Greeting"
)]
pub async fn greeting(
    RequestLocale(locale): RequestLocale,
    ApiQuery(query): ApiQuery<GreetingQuery>,
) -> Result<String, AppError> {
    let name = query
        .name
        .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string());
    let args = HashMap::from([("name", name)]);

    Ok(translate("GREETING", locale, &args))
}
