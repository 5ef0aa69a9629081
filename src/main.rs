use std::net::SocketAddr;
use std::time::Duration;

use aula_server::config::{establish_connection, AppConfig, SessionBackend};
use aula_server::domain::health::init_start_time;
use aula_server::global::shutdown::shutdown_signal;
use aula_server::session::{FileSessionStore, MemoryStore};
use aula_server::utils::logging::init_logging;
use aula_server::{app, AppState};
use tower_sessions::ExpiredDeletion;

/// 만료 세션 정리 주기
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 main 종료까지 유지)
    let _log_guard = init_logging();
    init_start_time();

    if let Err(e) = run().await {
        tracing::error!("Server terminated with error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // 3. 설정 로드
    let config = AppConfig::from_env()?;

    // 4. DB 연결 및 마이그레이션
    let db = establish_connection(&config).await?;

    // 5. 애플리케이션 상태 구성
    let state = AppState::new(db, config.clone());
    let router = match config.session_backend {
        SessionBackend::File => {
            let store = FileSessionStore::new(&config.session_dir)?;
            spawn_session_purge(store.clone());
            app(state, store)
        }
        SessionBackend::Memory => app(state, MemoryStore::default()),
    };

    // 6. 서버 실행
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        session_store = ?config.session_backend,
        "Server listening on {}, API docs at /api",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// 만료된 세션을 주기적으로 삭제하는 백그라운드 작업
fn spawn_session_purge(store: FileSessionStore) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = store.delete_expired().await {
                tracing::warn!("Session purge failed: {}", e);
            }
        }
    });
}
