use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug)]
pub enum Error {
    ConnectionFailed,
    MigrationFailed,
}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            Error::ConnectionFailed
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        Error::MigrationFailed
    })
}

pub async fn ping(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::query("SELECT 1")
        .execute(&db_conn.pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Database ping failed: {}", err);
            Error::ConnectionFailed
        })
}
