use std::sync::OnceLock;
use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};

static START_TIME: OnceLock<Instant> = OnceLock::new();

const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// 이 시간 이상 걸린 DB 응답은 Degraded
const DEGRADED_THRESHOLD: Duration = Duration::from_secs(2);

/// 서버 시작 시각 기록 (main에서 한 번 호출)
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

pub fn uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = check_database(db).await;

    HealthStatus {
        status: determine_health_state(&database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: uptime_secs(),
        checks: HealthChecks { database },
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        HealthState::Unhealthy
    } else if check.latency_ms >= DEGRADED_THRESHOLD.as_millis() as u64 {
        HealthState::Degraded
    } else {
        HealthState::Healthy
    }
}

async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();
    let outcome = timeout(PING_TIMEOUT, db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(())) => CheckResult::success(latency_ms),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database health check failed");
            CheckResult::failure(latency_ms, e.to_string())
        }
        Err(_) => {
            tracing::error!("Database health check timed out");
            CheckResult::failure(latency_ms, "Timeout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_check_should_be_unhealthy() {
        let state = determine_health_state(&CheckResult::failure(10, "closed"));

        assert_eq!(state, HealthState::Unhealthy);
    }

    #[test]
    fn slow_check_should_be_degraded() {
        assert_eq!(
            determine_health_state(&CheckResult::success(2000)),
            HealthState::Degraded
        );
        assert_eq!(
            determine_health_state(&CheckResult::success(5)),
            HealthState::Healthy
        );
    }
}
