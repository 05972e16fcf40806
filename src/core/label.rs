//! Representative-label resolution for sample windows.

use crate::ingest::types::SensorSample;
use std::collections::BTreeMap;

/// Resolve one representative activity label by majority vote.
///
/// Counts the activity values across the window; unlabeled samples do not
/// vote. Ties on the maximum count resolve to the lexicographically smallest
/// label. Returns `None` for an empty window or when no sample carries an
/// activity.
pub fn majority_label(samples: &[SensorSample]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sample in samples {
        if let Some(activity) = sample.activity.as_deref() {
            *counts.entry(activity).or_default() += 1;
        }
    }

    // Ascending label order plus a strict comparison keeps the smallest
    // label among equal counts.
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, _)| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(ms: i64, activity: Option<&str>) -> SensorSample {
        SensorSample {
            subject_id: 1,
            activity: activity.map(str::to_string),
            timestamp: Utc.timestamp_millis_opt(ms).unwrap(),
            accel_x: 0.0,
            accel_y: 0.0,
            accel_z: 0.0,
            gyro_x: 0.0,
            gyro_y: 0.0,
            gyro_z: 0.0,
        }
    }

    #[test]
    fn test_majority_wins() {
        let samples = vec![
            sample(0, Some("walking")),
            sample(500, Some("falling")),
            sample(1000, Some("walking")),
            sample(1500, Some("walking")),
        ];
        assert_eq!(majority_label(&samples).as_deref(), Some("walking"));
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        let samples = vec![
            sample(0, Some("walking")),
            sample(500, Some("falling")),
            sample(1000, Some("falling")),
            sample(1500, Some("walking")),
        ];
        assert_eq!(majority_label(&samples).as_deref(), Some("falling"));
    }

    #[test]
    fn test_empty_window_has_no_label() {
        assert_eq!(majority_label(&[]), None);
    }

    #[test]
    fn test_unlabeled_samples_do_not_vote() {
        let samples = vec![
            sample(0, None),
            sample(500, None),
            sample(1000, Some("sitting")),
        ];
        assert_eq!(majority_label(&samples).as_deref(), Some("sitting"));

        let unlabeled = vec![sample(0, None), sample(500, None)];
        assert_eq!(majority_label(&unlabeled), None);
    }
}
