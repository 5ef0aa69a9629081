//! 세션 모듈
//!
//! 쿠키 발급, 세션 ID 재발급, 만료 처리는 tower-sessions의 `SessionManagerLayer`가 담당합니다.
//! - `FileSessionStore`: 세션당 JSON 파일 하나를 사용하는 `SessionStore` 구현
//! - `MemoryStore`: tower-sessions 내장 메모리 저장소 (테스트/단일 인스턴스용)
//!
//! 만료된 레코드는 조회 시 없는 것으로 취급됩니다.

pub mod file_store;

use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::{AppConfig, MAX_SESSION_TTL_SECS};

pub use file_store::FileSessionStore;
pub use tower_sessions::MemoryStore;

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "sid";

/// 세션 데이터에서 로그인 사용자 이름을 담는 키
pub const SESSION_USER_KEY: &str = "username";

/// 세션 미들웨어 구성
///
/// 로그인 이후 세션 데이터는 바뀌지 않으므로 만료 시각은 로그인 시점에 고정됩니다.
pub fn session_layer<S>(store: S, config: &AppConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    let ttl = config.session_ttl_secs.clamp(1, MAX_SESSION_TTL_SECS);

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_path("/")
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(ttl)))
}
