//! Raw-sample table access.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::ingest::types::{RawRecord, SensorSample};

/// Insert a batch of intake rows in one transaction.
pub async fn insert_batch(pool: &SqlitePool, records: &[RawRecord]) -> Result<u64> {
    let mut tx = pool.begin().await?;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO raw_sensor_data
              (subject_id, activity, timestamp,
               accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.subject_id)
        .bind(&record.activity)
        .bind(record.timestamp)
        .bind(record.accel_x)
        .bind(record.accel_y)
        .bind(record.accel_z)
        .bind(record.gyro_x)
        .bind(record.gyro_y)
        .bind(record.gyro_z)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(records.len() as u64)
}

/// Fetch all samples with valid timestamps, ordered by subject and time.
///
/// Rows whose timestamp was coerced to NULL at ingestion are excluded; the
/// orchestrator reports their count separately.
pub async fn fetch_samples(pool: &SqlitePool) -> Result<Vec<SensorSample>> {
    let samples = sqlx::query_as::<_, SensorSample>(
        r#"
        SELECT subject_id, activity, timestamp,
               accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z
        FROM raw_sensor_data
        WHERE timestamp IS NOT NULL
        ORDER BY subject_id, timestamp
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(samples)
}

/// Total number of intake rows.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM raw_sensor_data")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Number of intake rows whose timestamp could not be parsed.
pub async fn null_timestamp_count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM raw_sensor_data WHERE timestamp IS NULL")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
