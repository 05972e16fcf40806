//! Window-record table access.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::core::features::FeatureVector;
use crate::core::windowing::Window;
use crate::error::Result;

/// One persisted window with its feature document.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WindowRecord {
    pub window_id: i64,
    pub subject_id: i64,
    pub t_start: DateTime<Utc>,
    pub t_end: DateTime<Utc>,
    pub label: Option<String>,
    pub features: Json<FeatureVector>,
}

/// Insert one accepted window inside the run-wide transaction.
pub async fn insert(
    tx: &mut Transaction<'_, Sqlite>,
    window: &Window,
    label: Option<&str>,
    features: &FeatureVector,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO windows (subject_id, t_start, t_end, label, features)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(window.subject_id)
    .bind(window.t_start)
    .bind(window.t_end)
    .bind(label)
    .bind(Json(features))
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Fetch one subject's windows ordered by start time.
pub async fn fetch_for_subject(pool: &SqlitePool, subject_id: i64) -> Result<Vec<WindowRecord>> {
    let records = sqlx::query_as::<_, WindowRecord>(
        r#"
        SELECT window_id, subject_id, t_start, t_end, label, features
        FROM windows
        WHERE subject_id = ?
        ORDER BY t_start
        "#,
    )
    .bind(subject_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Total number of persisted windows.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM windows")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
