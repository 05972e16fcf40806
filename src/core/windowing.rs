//! Time-based segmentation of one subject's samples into fixed-length windows.
//!
//! Windows cover half-open intervals `[t_start, t_end)` and advance by a
//! fixed stride, so consecutive windows may overlap (stride < length) or
//! leave gaps (stride > length).

use crate::ingest::types::SensorSample;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A fixed-length time window over one subject's samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    /// Subject the window belongs to
    pub subject_id: i64,
    /// Start time (inclusive)
    pub t_start: DateTime<Utc>,
    /// End time (exclusive); always `t_start + window_length`
    pub t_end: DateTime<Utc>,
}

impl Window {
    /// Check if a timestamp falls within this window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.t_start && timestamp < self.t_end
    }

    /// Get the duration of this window in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.t_end - self.t_start).num_milliseconds() as f64 / 1000.0
    }
}

/// Lazy iterator over the windows of one subject's time-sorted samples.
///
/// Created by [`segment`]; yields each window together with the sub-slice of
/// samples whose timestamps fall inside it.
pub struct Windows<'a> {
    samples: &'a [SensorSample],
    subject_id: i64,
    window_length: Duration,
    stride: Duration,
    next_start: Option<DateTime<Utc>>,
    t_max: DateTime<Utc>,
}

impl<'a> Iterator for Windows<'a> {
    type Item = (Window, &'a [SensorSample]);

    fn next(&mut self) -> Option<Self::Item> {
        // Non-positive lengths are a configuration error caught upstream;
        // refusing to yield here keeps a mis-wired caller finite.
        if self.window_length <= Duration::zero() || self.stride <= Duration::zero() {
            return None;
        }

        let t_start = self.next_start?;
        let t_end = t_start + self.window_length;
        if t_end > self.t_max {
            self.next_start = None;
            return None;
        }

        // Samples are time-sorted, so a window's members form a contiguous
        // run locatable by binary search.
        let lo = self.samples.partition_point(|s| s.timestamp < t_start);
        let hi = self.samples.partition_point(|s| s.timestamp < t_end);

        self.next_start = Some(t_start + self.stride);

        Some((
            Window {
                subject_id: self.subject_id,
                t_start,
                t_end,
            },
            &self.samples[lo..hi],
        ))
    }
}

/// Segment one subject's time-sorted samples into fixed-length windows.
///
/// Starting at the earliest timestamp, emits a window every `stride` until
/// the next window would extend past the latest timestamp. An empty slice
/// yields no windows, as does a span shorter than `window_length`.
pub fn segment(
    samples: &[SensorSample],
    window_length: Duration,
    stride: Duration,
) -> Windows<'_> {
    let (next_start, t_max, subject_id) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (Some(first.timestamp), last.timestamp, first.subject_id),
        _ => (None, DateTime::<Utc>::MIN_UTC, 0),
    };

    Windows {
        samples,
        subject_id,
        window_length,
        stride,
        next_start,
        t_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at(millis: i64) -> SensorSample {
        SensorSample {
            subject_id: 1,
            activity: Some("walking".to_string()),
            timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
            accel_x: 0.0,
            accel_y: 0.0,
            accel_z: 0.0,
            gyro_x: 0.0,
            gyro_y: 0.0,
            gyro_z: 0.0,
        }
    }

    fn series(offsets_ms: &[i64]) -> Vec<SensorSample> {
        offsets_ms.iter().map(|&ms| sample_at(ms)).collect()
    }

    #[test]
    fn test_window_contains_half_open() {
        let window = Window {
            subject_id: 1,
            t_start: Utc.timestamp_millis_opt(0).unwrap(),
            t_end: Utc.timestamp_millis_opt(2000).unwrap(),
        };

        assert!(window.contains(Utc.timestamp_millis_opt(0).unwrap()));
        assert!(window.contains(Utc.timestamp_millis_opt(1999).unwrap()));
        assert!(!window.contains(Utc.timestamp_millis_opt(2000).unwrap()));
        assert!(!window.contains(Utc.timestamp_millis_opt(-1).unwrap()));
    }

    #[test]
    fn test_every_window_has_exact_length_and_stride() {
        let samples = series(&[0, 500, 1000, 1500, 2000, 2500, 3000, 3500, 4000]);
        let windows: Vec<_> =
            segment(&samples, Duration::seconds(2), Duration::milliseconds(500)).collect();

        assert!(!windows.is_empty());
        for (window, _) in &windows {
            assert_eq!(window.t_end - window.t_start, Duration::seconds(2));
        }
        for pair in windows.windows(2) {
            assert_eq!(
                pair[1].0.t_start - pair[0].0.t_start,
                Duration::milliseconds(500)
            );
        }
    }

    #[test]
    fn test_termination_at_series_end() {
        // t_max = 4.0s, so the last admissible 2s window starts at 2.0s
        let samples = series(&[0, 1000, 2000, 3000, 4000]);
        let windows: Vec<_> =
            segment(&samples, Duration::seconds(2), Duration::seconds(1)).collect();

        assert_eq!(windows.len(), 3);
        let last = &windows.last().unwrap().0;
        assert_eq!(last.t_start, Utc.timestamp_millis_opt(2000).unwrap());
        assert_eq!(last.t_end, Utc.timestamp_millis_opt(4000).unwrap());
    }

    #[test]
    fn test_empty_series_yields_zero_windows() {
        let samples: Vec<SensorSample> = Vec::new();
        assert_eq!(
            segment(&samples, Duration::seconds(2), Duration::seconds(1)).count(),
            0
        );
    }

    #[test]
    fn test_series_shorter_than_window_yields_zero_windows() {
        let samples = series(&[0, 500, 1000]);
        assert_eq!(
            segment(&samples, Duration::seconds(2), Duration::seconds(1)).count(),
            0
        );
    }

    #[test]
    fn test_half_open_membership() {
        // A sample exactly at t_end belongs to the next window, not this one
        let samples = series(&[0, 1000, 2000, 3000, 4000]);
        let windows: Vec<_> =
            segment(&samples, Duration::seconds(2), Duration::seconds(2)).collect();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].1.len(), 2); // 0.0s and 1.0s; 2.0s is excluded
        assert_eq!(windows[1].1.len(), 2); // 2.0s and 3.0s; 4.0s is excluded
    }

    #[test]
    fn test_overlapping_windows_share_samples() {
        let samples = series(&[0, 500, 1000, 1500, 2000, 2500, 3000]);
        let windows: Vec<_> =
            segment(&samples, Duration::seconds(2), Duration::seconds(1)).collect();

        assert_eq!(windows.len(), 2);
        // [0, 2) and [1, 3) both contain the samples at 1.0s and 1.5s
        assert!(windows[0].1.iter().any(|s| s.timestamp.timestamp_millis() == 1500));
        assert!(windows[1].1.iter().any(|s| s.timestamp.timestamp_millis() == 1500));
    }

    #[test]
    fn test_gapped_stride_skips_samples() {
        let samples = series(&[0, 500, 1000, 1500, 2000, 2500, 3000, 3500, 4000]);
        let windows: Vec<_> =
            segment(&samples, Duration::seconds(1), Duration::seconds(3)).collect();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].0.t_start, Utc.timestamp_millis_opt(0).unwrap());
        assert_eq!(windows[1].0.t_start, Utc.timestamp_millis_opt(3000).unwrap());
    }

    #[test]
    fn test_non_positive_durations_yield_nothing() {
        let samples = series(&[0, 1000, 2000]);
        assert_eq!(segment(&samples, Duration::zero(), Duration::seconds(1)).count(), 0);
        assert_eq!(segment(&samples, Duration::seconds(1), Duration::zero()).count(), 0);
    }
}
