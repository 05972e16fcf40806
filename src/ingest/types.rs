//! Record types at the ingestion boundary.
//!
//! `RawRecord` is what the CSV loader produces: its timestamp is optional
//! because unparseable values are coerced to NULL rather than rejecting the
//! row. `SensorSample` is what the windowing engine reads back: rows without
//! a valid timestamp never reach it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Columns every intake file must provide. A missing column aborts the whole
/// batch before any write.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "subject_id",
    "activity",
    "timestamp",
    "accel_x",
    "accel_y",
    "accel_z",
    "gyro_x",
    "gyro_y",
    "gyro_z",
];

/// One intake row as written to the raw store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub subject_id: i64,
    /// Activity label; absent for unlabeled rows
    pub activity: Option<String>,
    /// None when the source value could not be parsed
    pub timestamp: Option<DateTime<Utc>>,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
}

/// One sensor sample as read by the windowing engine.
///
/// Immutable once read; the engine only borrows slices of these.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorSample {
    pub subject_id: i64,
    /// Activity label; absent for unlabeled rows
    pub activity: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
}

impl SensorSample {
    /// Euclidean norm of the accelerometer axes.
    pub fn accel_magnitude(&self) -> f64 {
        (self.accel_x * self.accel_x + self.accel_y * self.accel_y + self.accel_z * self.accel_z)
            .sqrt()
    }

    /// Euclidean norm of the gyroscope axes.
    pub fn gyro_magnitude(&self) -> f64 {
        (self.gyro_x * self.gyro_x + self.gyro_y * self.gyro_y + self.gyro_z * self.gyro_z).sqrt()
    }
}
