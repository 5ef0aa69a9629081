use std::env;
use std::path::PathBuf;

/// 세션 수명 상한 (1년). 만료 시각 계산이 넘치지 않도록 제한
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// 세션 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    File,
    Memory,
}

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    /// 엔티티 정의 기반 스키마 자동 동기화 (개발 전용)
    pub db_schema_sync: bool,
    /// SQL 문 로깅 여부
    pub db_logging: bool,

    // Session
    pub session_backend: SessionBackend,
    pub session_dir: PathBuf,
    pub session_ttl_secs: i64,
    pub cookie_secure: bool,

    // Admin principal
    pub admin_username: String,
    pub admin_password: String,

    // i18n
    pub default_locale: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://database.sqlite?mode=rwc".to_string());

        let db_schema_sync = parse_flag("DB_SCHEMA_SYNC", false)?;
        let db_logging = parse_flag("DB_LOGGING", true)?;

        let session_backend = match env::var("SESSION_STORE")
            .unwrap_or_else(|_| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" => SessionBackend::File,
            "memory" => SessionBackend::Memory,
            other => return Err(ConfigError::InvalidSessionStore(other.to_string())),
        };

        let session_dir = env::var("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./sessions"));

        let session_ttl_secs =
            parse_session_ttl(&env::var("SESSION_TTL_SECS").unwrap_or_else(|_| "86400".to_string()))?;

        let cookie_secure = parse_flag("COOKIE_SECURE", false)?;
        if !cookie_secure {
            tracing::warn!(
                "COOKIE_SECURE가 false입니다. HTTPS 프로덕션 환경에서는 반드시 true로 설정하세요."
            );
        }

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!(
                "ADMIN_PASSWORD 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "12345678".to_string()
        });

        let default_locale = env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "es".to_string());

        Ok(Self {
            server_port,
            database_url,
            db_schema_sync,
            db_logging,
            session_backend,
            session_dir,
            session_ttl_secs,
            cookie_secure,
            admin_username,
            admin_password,
            default_locale,
        })
    }

    /// 테스트용 설정: 메모리 DB, 메모리 세션 저장소
    pub fn for_tests() -> Self {
        Self {
            server_port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_schema_sync: false,
            db_logging: false,
            session_backend: SessionBackend::Memory,
            session_dir: PathBuf::from("./sessions"),
            session_ttl_secs: 86400,
            cookie_secure: false,
            admin_username: "admin".to_string(),
            admin_password: "12345678".to_string(),
            default_locale: "es".to_string(),
        }
    }
}

/// `SESSION_TTL_SECS` 파싱: 1초 이상 `MAX_SESSION_TTL_SECS` 이하만 허용
pub fn parse_session_ttl(raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|ttl| (1..=MAX_SESSION_TTL_SECS).contains(ttl))
        .ok_or(ConfigError::InvalidSessionTtl)
}

fn parse_flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidFlag(name)),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("SESSION_TTL_SECS must be between 1 and {} seconds", MAX_SESSION_TTL_SECS)]
    InvalidSessionTtl,
    #[error("Unknown SESSION_STORE '{0}', expected 'file' or 'memory'")]
    InvalidSessionStore(String),
    #[error("{0} must be 'true' or 'false'")]
    InvalidFlag(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_should_use_memory_backends() {
        let config = AppConfig::for_tests();

        assert_eq!(config.session_backend, SessionBackend::Memory);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.session_ttl_secs, 86400);
    }

    #[test]
    fn session_ttl_should_accept_values_within_bounds() {
        assert_eq!(parse_session_ttl("86400").unwrap(), 86400);
        assert_eq!(
            parse_session_ttl(&MAX_SESSION_TTL_SECS.to_string()).unwrap(),
            MAX_SESSION_TTL_SECS
        );
    }

    #[test]
    fn session_ttl_should_reject_values_that_overflow_expiry() {
        // 만료 시각 계산이 넘치는 값
        assert!(matches!(
            parse_session_ttl("100000000000000000"),
            Err(ConfigError::InvalidSessionTtl)
        ));
        assert!(parse_session_ttl(&(MAX_SESSION_TTL_SECS + 1).to_string()).is_err());
        assert!(parse_session_ttl("0").is_err());
        assert!(parse_session_ttl("-5").is_err());
        assert!(parse_session_ttl("soon").is_err());
    }

    #[test]
    fn config_error_should_name_the_offending_flag() {
        let err = ConfigError::InvalidFlag("DB_SCHEMA_SYNC");

        assert_eq!(err.to_string(), "DB_SCHEMA_SYNC must be 'true' or 'false'");
    }
}
