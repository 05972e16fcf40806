//! Persistent store for raw samples and window records.
//!
//! SQLite via sqlx. Schema setup is idempotent and safe to invoke on every
//! run: tables and indexes are created only if absent.

pub mod raw;
pub mod windows;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

/// Open a connection pool to the store.
///
/// `database_url` follows sqlx conventions, e.g.
/// `sqlite://fallsense.db?mode=rwc` to create the file on first use.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    info!("connected to {}", database_url);
    Ok(pool)
}

/// Create tables and indexes if they are not there (safe to call every run).
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS raw_sensor_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id INTEGER NOT NULL,
            activity TEXT,
            timestamp TEXT,
            accel_x REAL NOT NULL,
            accel_y REAL NOT NULL,
            accel_z REAL NOT NULL,
            gyro_x REAL NOT NULL,
            gyro_y REAL NOT NULL,
            gyro_z REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS windows (
            window_id INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id INTEGER NOT NULL,
            t_start TEXT NOT NULL,
            t_end TEXT NOT NULL,
            label VARCHAR(50),
            features TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Lookup index for ordered per-subject scans by downstream consumers
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_windows_subject_start
          ON windows(subject_id, t_start)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
