use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::domain::auth::credentials::{CredentialVerifier, StaticCredentials};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// 설정의 관리자 계정으로 자격 증명 검증기를 구성
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let credentials = Arc::new(StaticCredentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        ));

        Self {
            db,
            config,
            credentials,
        }
    }
}
