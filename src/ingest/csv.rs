//! CSV intake: column validation and row materialization.
//!
//! The nine required columns are validated against the header before any row
//! is materialized; a missing column aborts the whole batch. Timestamps are
//! parsed leniently and coerce to None on failure instead of rejecting the
//! row.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::ingest::types::{RawRecord, REQUIRED_COLUMNS};

/// Shape of one CSV row before timestamp coercion.
#[derive(Debug, Deserialize)]
struct CsvRow {
    subject_id: i64,
    activity: Option<String>,
    timestamp: Option<String>,
    accel_x: f64,
    accel_y: f64,
    accel_z: f64,
    gyro_x: f64,
    gyro_y: f64,
    gyro_z: f64,
}

/// Read and validate an intake CSV, materializing every row.
///
/// Fails before returning any data when the file is missing or a required
/// column is absent from the header.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(Error::Ingest(format!("CSV not found: {}", path.display())));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(Error::Ingest(format!(
            "missing columns in {}: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for row in reader.deserialize::<CsvRow>() {
        let row = row?;
        let timestamp = row.timestamp.as_deref().and_then(parse_timestamp);
        if timestamp.is_none() {
            coerced += 1;
        }
        records.push(RawRecord {
            subject_id: row.subject_id,
            activity: row.activity.filter(|a| !a.is_empty()),
            timestamp,
            accel_x: row.accel_x,
            accel_y: row.accel_y,
            accel_z: row.accel_z,
            gyro_x: row.gyro_x,
            gyro_y: row.gyro_y,
            gyro_z: row.gyro_z,
        });
    }

    if coerced > 0 {
        warn!(
            "{} row(s) in {} had unparseable timestamps (stored as NULL)",
            coerced,
            path.display()
        );
    }

    Ok(records)
}

/// Parse a timestamp string, accepting RFC 3339 and the common space- or
/// T-separated forms. Naive values are taken as UTC. Returns None on failure.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("fallsense-{}-{}.csv", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let path = write_temp_csv(
            "missing-col",
            "subject_id,activity,timestamp,accel_x,accel_y,accel_z,gyro_x,gyro_y\n",
        );
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, Error::Ingest(_)));
        assert!(err.to_string().contains("gyro_z"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unparseable_timestamp_coerces_to_none() {
        let path = write_temp_csv(
            "bad-ts",
            "subject_id,activity,timestamp,accel_x,accel_y,accel_z,gyro_x,gyro_y,gyro_z\n\
             1,walking,not-a-time,0.1,0.2,0.3,0.0,0.0,0.0\n\
             1,walking,2024-03-01 12:00:00,0.1,0.2,0.3,0.0,0.0,0.0\n",
        );
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].timestamp.is_none());
        assert!(records[1].timestamp.is_some());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-03-01T12:00:00Z").is_some());
        assert!(parse_timestamp("2024-03-01 12:00:00.250").is_some());
        assert!(parse_timestamp("2024-03-01T12:00:00.250").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_empty_activity_becomes_none() {
        let path = write_temp_csv(
            "empty-activity",
            "subject_id,activity,timestamp,accel_x,accel_y,accel_z,gyro_x,gyro_y,gyro_z\n\
             3,,2024-03-01 12:00:00,0.1,0.2,0.3,0.0,0.0,0.0\n",
        );
        let records = read_records(&path).unwrap();
        assert_eq!(records[0].subject_id, 3);
        assert!(records[0].activity.is_none());
        std::fs::remove_file(&path).ok();
    }
}
