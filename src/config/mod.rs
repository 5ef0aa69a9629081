pub mod app_config;
pub mod database;

pub use app_config::{AppConfig, ConfigError, SessionBackend, MAX_SESSION_TTL_SECS};
pub use database::establish_connection;
