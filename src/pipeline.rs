//! Orchestration of one windowing run.
//!
//! Fetches the raw series, partitions it by subject, segments each subject
//! independently, and persists every accepted window in a single atomic
//! commit: either all windows of the run are stored or none are.

use std::collections::BTreeMap;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{extract_features, majority_label, segment};
use crate::db;
use crate::error::Result;
use crate::ingest::types::SensorSample;

/// Run the windowing engine over the whole raw store.
///
/// Returns the number of windows persisted. An empty raw store logs a
/// warning and returns 0 without writing anything.
pub async fn run(pool: &SqlitePool, config: &Config) -> Result<u64> {
    let skipped = db::raw::null_timestamp_count(pool).await?;
    if skipped > 0 {
        warn!(
            "{} raw row(s) have no valid timestamp and are excluded from windowing",
            skipped
        );
    }

    let samples = db::raw::fetch_samples(pool).await?;
    if samples.is_empty() {
        warn!("raw_sensor_data is empty; load a CSV first (fallsense load <csv>)");
        return Ok(0);
    }

    let window_length = config.window_length();
    let stride = config.stride();

    // Explicit partition into per-subject series; subjects never interact.
    let mut series: BTreeMap<i64, Vec<SensorSample>> = BTreeMap::new();
    for sample in samples {
        series.entry(sample.subject_id).or_default().push(sample);
    }

    let mut total = 0u64;
    let mut tx = pool.begin().await?;

    for (subject_id, mut subject_samples) in series {
        // The engine does not trust store ordering
        subject_samples.sort_by_key(|s| s.timestamp);

        let before = total;
        for (window, chunk) in segment(&subject_samples, window_length, stride) {
            let Some(features) = extract_features(chunk) else {
                // Under-populated windows are routine, not exceptional
                continue;
            };
            let label = majority_label(chunk);
            db::windows::insert(&mut tx, &window, label.as_deref(), &features).await?;
            total += 1;
        }
        debug!("subject {}: {} windows", subject_id, total - before);
    }

    tx.commit().await?;

    info!(
        "created {} windows (win={}s, stride={}s, sample_rate≈{}Hz)",
        total, config.window_seconds, config.stride_seconds, config.sample_rate_hz
    );
    Ok(total)
}
