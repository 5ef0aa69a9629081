use crate::config::AppConfig;
use crate::domain::{
    ingredient::entity::ingredient, player::entity::player, recipe::entity::recipe,
    team::entity::team,
};
use chrono::Utc;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement,
    TransactionTrait,
};
use tracing::{info, warn};

/// 버전이 매겨진 스키마 마이그레이션
///
/// 적용된 버전은 `schema_migrations` 테이블에 기록되며, 한 번 배포된 항목은 수정하지 않고
/// 새 버전을 뒤에 추가합니다.
#[derive(Debug)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub statements: &'static [&'static str],
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_team_and_player",
        statements: &[
            "CREATE TABLE IF NOT EXISTS team (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                country TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS player (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                team_id INTEGER NULL,
                FOREIGN KEY (team_id) REFERENCES team (id) ON UPDATE NO ACTION ON DELETE SET NULL
            )",
            "CREATE INDEX IF NOT EXISTS idx_player_team_id ON player (team_id)",
        ],
    },
    Migration {
        version: 2,
        name: "create_receta_and_ingrediente",
        statements: &[
            "CREATE TABLE IF NOT EXISTS receta (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS ingrediente (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity TEXT NOT NULL,
                recipe_id INTEGER NULL,
                FOREIGN KEY (recipe_id) REFERENCES receta (id) ON UPDATE NO ACTION ON DELETE SET NULL
            )",
            "CREATE INDEX IF NOT EXISTS idx_ingrediente_recipe_id ON ingrediente (recipe_id)",
        ],
    },
];

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(config.db_logging);

    // 메모리 DB는 커넥션마다 별도 DB가 되므로 커넥션 하나만 사용
    if config.database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Successfully connected to the database.");

    run_migrations(&db).await?;

    if config.db_schema_sync {
        warn!("DB_SCHEMA_SYNC is enabled. Entity-derived schema sync is for development only.");
        sync_schema(&db).await?;
    }

    Ok(db)
}

/// 아직 적용되지 않은 마이그레이션을 버전 순서대로 적용
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    db.execute(Statement::from_string(
        backend,
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER NOT NULL PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
    ))
    .await?;

    let applied = applied_versions(db).await?;
    let pending = pending_migrations(&applied);

    if pending.is_empty() {
        info!("Database schema is up to date.");
        return Ok(());
    }

    for migration in pending {
        let txn = db.begin().await?;

        for sql in migration.statements {
            txn.execute(Statement::from_string(backend, *sql)).await?;
        }

        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?, ?, ?)",
            [
                migration.version.into(),
                migration.name.into(),
                Utc::now().to_rfc3339().into(),
            ],
        ))
        .await?;

        txn.commit().await?;
        info!(
            version = migration.version,
            name = migration.name,
            "Applied schema migration"
        );
    }

    Ok(())
}

async fn applied_versions(db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT version FROM schema_migrations ORDER BY version",
        ))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<i64>("", "version"))
        .collect()
}

/// 적용되지 않은 마이그레이션 목록 (버전 오름차순)
pub fn pending_migrations(applied: &[i64]) -> Vec<&'static Migration> {
    let mut pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .collect();
    pending.sort_by_key(|m| m.version);
    pending
}

/// 엔티티 정의로부터 테이블 생성 (개발 전용)
async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys! (Parent first, then Child)
    create_table_if_not_exists(db, &schema, team::Entity).await?;
    create_table_if_not_exists(db, &schema, player::Entity).await?;
    create_table_if_not_exists(db, &schema, recipe::Entity).await?;
    create_table_if_not_exists(db, &schema, ingredient::Entity).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table: {}", e);
        e
    })
}
