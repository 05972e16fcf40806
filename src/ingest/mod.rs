//! Raw-file ingestion for the ETL pipeline.
//!
//! Validates intake files against the required column set and bulk-loads
//! them into the raw store. Ingestion is the only place where timestamps may
//! be invalid; everything downstream reads validated samples.

pub mod csv;
pub mod types;

// Re-export commonly used types
pub use types::{RawRecord, SensorSample, REQUIRED_COLUMNS};

use std::path::Path;

use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::Result;

/// Load one CSV file into the raw store.
///
/// Column validation happens before any write; the insert runs in a single
/// transaction. Returns the number of rows inserted.
pub async fn load_csv(pool: &SqlitePool, path: &Path) -> Result<u64> {
    let records = csv::read_records(path)?;
    let inserted = db::raw::insert_batch(pool, &records).await?;
    info!("inserted {} rows from {}", inserted, path.display());
    Ok(inserted)
}
