//! 로깅 초기화 모듈
//!
//! stdout과 일별 로그 파일에 구조화된 로그를 남깁니다.
//! SQL 문 로그(sea-orm / sqlx)도 같은 구독자를 통해 출력됩니다.

use std::path::Path;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "info,aula_server=debug,sea_orm=info,sqlx=info";

/// stdout 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` 값 해석. `pretty`가 아니면 JSON
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// 로깅 시스템을 초기화합니다.
///
/// 로그 레벨은 `RUST_LOG`, stdout 형식은 `LOG_FORMAT`(json | pretty),
/// 파일 위치는 `LOG_DIR`(기본 `logs/`)로 설정합니다. 파일은 항상 JSON입니다.
///
/// 반환되는 `WorkerGuard`를 main에서 유지해야 종료 시 버퍼링된 로그가 손실되지 않습니다.
pub fn init_logging() -> WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(Path::new(&log_dir), "aula-server.log"));

    let stdout_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_current_span(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_target(true)
            .boxed(),
    };

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(file_writer);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 테스트 등에서 이미 전역 구독자가 설정된 경우에는 그대로 둔다
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        tracing::debug!("tracing subscriber already initialized: {}", err);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_should_default_to_json() {
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("text")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" Pretty ")), LogFormat::Pretty);
    }
}
