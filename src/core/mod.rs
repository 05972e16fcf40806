//! Core windowing and feature-extraction engine.
//!
//! This module contains:
//! - Time-based segmentation of per-subject series into fixed-length windows
//! - Statistical feature computation per window
//! - Majority-vote label resolution per window

pub mod features;
pub mod label;
pub mod windowing;

// Re-export commonly used types
pub use features::{extract_features, FeatureVector, MIN_WINDOW_SAMPLES};
pub use label::majority_label;
pub use windowing::{segment, Window, Windows};
