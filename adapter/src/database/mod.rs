use std::str::FromStr;

use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool, Transaction,
};

pub mod model;

// 参照データ（資料種別・ジャンル・初期資料など）
const SEED_SQL: &str = include_str!("../../fixtures/seed.sql");

#[derive(Clone)]
pub struct ConnectionPool(SqlitePool);

impl ConnectionPool {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &SqlitePool {
        &self.0
    }

    pub async fn begin(&self) -> AppResult<Transaction<'_, Sqlite>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

fn make_sqlite_connect_options(cfg: &DatabaseConfig) -> AppResult<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(&cfg.url)
        .map_err(AppError::SpecificOperationError)?
        .create_if_missing(true)
        .foreign_keys(true);
    Ok(options)
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> AppResult<ConnectionPool> {
    let options = make_sqlite_connect_options(cfg)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_lazy_with(options);
    Ok(ConnectionPool(pool))
}

// インメモリ DB は接続ごとに別物になるので、接続を 1 本に固定して使い回す
pub async fn connect_in_memory() -> AppResult<ConnectionPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(AppError::SpecificOperationError)?
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(AppError::SpecificOperationError)?;
    Ok(ConnectionPool(pool))
}

pub async fn migrate(db: &ConnectionPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(db.inner_ref()).await
}

pub async fn seed(db: &ConnectionPool) -> AppResult<()> {
    sqlx::raw_sql(SEED_SQL)
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
    tracing::info!("seeded reference data");
    Ok(())
}

// 外部キー制約違反は存在しない ID を参照したリクエストとして扱う
pub(crate) fn map_write_error(e: sqlx::Error, message: impl FnOnce() -> String) -> AppError {
    let violates_foreign_key = e
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation());
    if violates_foreign_key {
        AppError::InvalidReference(message())
    } else {
        AppError::SpecificOperationError(e)
    }
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[cfg(test)]
pub(crate) async fn seeded_pool() -> ConnectionPool {
    let db = connect_in_memory().await.unwrap();
    migrate(&db).await.unwrap();
    seed(&db).await.unwrap();
    db
}
