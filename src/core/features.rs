//! Statistical feature computation over sample windows.
//!
//! Each accepted window yields a flat 67-value fingerprint: 8 statistics for
//! each of 8 channels (six sensor axes plus the two derived magnitude
//! channels) and 3 cross-axis correlations. Windows with fewer than 5 samples
//! produce no output and are dropped by the caller.

use crate::ingest::types::SensorSample;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;

/// Flat name → value mapping persisted verbatim per window.
///
/// A `BTreeMap` keeps key order deterministic in the serialized document.
pub type FeatureVector = BTreeMap<String, f64>;

/// Windows with fewer samples than this produce no features.
pub const MIN_WINDOW_SAMPLES: usize = 5;

/// Compute the feature vector for one window's samples.
///
/// Returns `None` for windows with fewer than [`MIN_WINDOW_SAMPLES`] samples;
/// such windows are discarded entirely. The result is a pure function of the
/// samples' numeric values.
pub fn extract_features(samples: &[SensorSample]) -> Option<FeatureVector> {
    if samples.len() < MIN_WINDOW_SAMPLES {
        return None;
    }

    let accel_x: Vec<f64> = samples.iter().map(|s| s.accel_x).collect();
    let accel_y: Vec<f64> = samples.iter().map(|s| s.accel_y).collect();
    let accel_z: Vec<f64> = samples.iter().map(|s| s.accel_z).collect();
    let gyro_x: Vec<f64> = samples.iter().map(|s| s.gyro_x).collect();
    let gyro_y: Vec<f64> = samples.iter().map(|s| s.gyro_y).collect();
    let gyro_z: Vec<f64> = samples.iter().map(|s| s.gyro_z).collect();
    let acc_mag: Vec<f64> = samples.iter().map(SensorSample::accel_magnitude).collect();
    let gyro_mag: Vec<f64> = samples.iter().map(SensorSample::gyro_magnitude).collect();

    let channels: [(&str, &[f64]); 8] = [
        ("accel_x", &accel_x),
        ("accel_y", &accel_y),
        ("accel_z", &accel_z),
        ("gyro_x", &gyro_x),
        ("gyro_y", &gyro_y),
        ("gyro_z", &gyro_z),
        ("acc_mag", &acc_mag),
        ("gyro_mag", &gyro_mag),
    ];

    let mut out = FeatureVector::new();
    for (name, values) in channels {
        push_channel_stats(&mut out, name, values);
    }

    // Cross-axis correlations (accelerometer only, most informative)
    out.insert(
        "corr_accel_x_accel_y".to_string(),
        safe_corr(&accel_x, &accel_y),
    );
    out.insert(
        "corr_accel_x_accel_z".to_string(),
        safe_corr(&accel_x, &accel_z),
    );
    out.insert(
        "corr_accel_y_accel_z".to_string(),
        safe_corr(&accel_y, &accel_z),
    );

    Some(out)
}

/// Append the 8 per-channel statistics under `{name}_{statistic}` keys.
fn push_channel_stats(out: &mut FeatureVector, name: &str, values: &[f64]) {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    out.insert(format!("{name}_mean"), values.mean());
    out.insert(format!("{name}_std"), sample_std(values));
    out.insert(format!("{name}_min"), values.min());
    out.insert(format!("{name}_max"), values.max());
    out.insert(format!("{name}_p25"), percentile(&sorted, 25.0));
    out.insert(format!("{name}_p50"), percentile(&sorted, 50.0));
    out.insert(format!("{name}_p75"), percentile(&sorted, 75.0));
    out.insert(
        format!("{name}_energy"),
        values.iter().map(|v| v * v).mean(),
    );
}

/// Sample (Bessel-corrected) standard deviation, 0.0 for a single value.
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.std_dev()
}

/// Percentile with linear interpolation over a sorted slice.
///
/// Rank is `p/100 * (n - 1)`; fractional ranks interpolate between the two
/// neighboring order statistics.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Pearson correlation, defined as 0.0 for short or zero-variance series.
fn safe_corr(a: &[f64], b: &[f64]) -> f64 {
    if a.len() <= 2 || b.len() <= 2 {
        return 0.0;
    }

    let std_a = a.std_dev();
    let std_b = b.std_dev();
    if std_a <= 0.0 || std_b <= 0.0 || !std_a.is_finite() || !std_b.is_finite() {
        return 0.0;
    }

    a.covariance(b) / (std_a * std_b)
}
