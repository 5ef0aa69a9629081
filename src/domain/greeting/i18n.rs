//! 다국어 메시지 카탈로그와 요청 언어 결정
//!
//! 언어 결정 우선순위:
//! 1. `lang` 쿼리 파라미터
//! 2. `Accept-Language` 헤더 (보낸 순서대로, 지원하는 첫 언어)
//! 3. `x-lang` 헤더
//! 4. 설정의 기본 언어 (`DEFAULT_LOCALE`)
//!
//! 각 단계에서 지원하지 않는 값이면 다음 단계로 넘어갑니다.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header::ACCEPT_LANGUAGE, request::Parts, HeaderMap},
};
use serde::Deserialize;

use crate::state::AppState;

pub const LANG_HEADER: &str = "x-lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// `es`, `en-US`, `EN` 등에서 기본 언어 태그만 보고 판단
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    fn catalog(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::Es => &[
                ("HELLO", "¡Hola Mundo!"),
                ("WELCOME", "Bienvenido a nuestra aplicación"),
                ("GREETING", "¡Hola {name}! ¿Cómo estás?"),
            ],
            Locale::En => &[
                ("HELLO", "Hello World!"),
                ("WELCOME", "Welcome to our application"),
                ("GREETING", "Hello {name}! How are you?"),
            ],
        }
    }
}

/// 메시지 키 번역
///
/// 카탈로그에 없는 키는 키 자체를 반환합니다. `{arg}` 자리표시자는 `args`로 치환합니다.
pub fn translate(key: &str, locale: Locale, args: &HashMap<&str, String>) -> String {
    let Some((_, template)) = locale.catalog().iter().find(|(k, _)| *k == key) else {
        return key.to_string();
    };

    args.iter()
        .fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{}}}", name), value)
        })
}

/// `Accept-Language` 값에서 지원하는 첫 언어 (q=0 항목은 제외)
pub fn from_accept_language(value: &str) -> Option<Locale> {
    value.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let tag = parts.next()?.trim();

        let rejected = parts.any(|param| {
            param
                .trim()
                .strip_prefix("q=")
                .and_then(|q| q.trim().parse::<f32>().ok())
                .is_some_and(|q| q <= 0.0)
        });

        if rejected {
            None
        } else {
            Locale::parse(tag)
        }
    })
}

/// 쿼리 / 헤더 / 기본값 순서로 요청 언어 결정
pub fn resolve_locale(query_lang: Option<&str>, headers: &HeaderMap, default: Locale) -> Locale {
    let from_query = query_lang.and_then(Locale::parse);

    let from_accept = || {
        headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(from_accept_language)
    };

    let from_custom = || {
        headers
            .get(LANG_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(Locale::parse)
    };

    from_query
        .or_else(from_accept)
        .or_else(from_custom)
        .unwrap_or(default)
}

#[derive(Debug, Default, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// 요청에서 결정된 언어 추출기 (실패하지 않음)
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

#[async_trait]
impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let query = Query::<LangQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        let default = Locale::parse(&state.config.default_locale).unwrap_or_default();

        Ok(Self(resolve_locale(
            query.lang.as_deref(),
            &parts.headers,
            default,
        )))
    }
}
