//! Configuration for the ETL pipeline.
//!
//! One value object, constructed at startup from CLI flags and environment
//! variables, validated eagerly, and passed explicitly to the commands that
//! need it. Nothing reads configuration implicitly after startup.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Nominal wearable sample rate (UP-Fall wearables record at ~18 Hz).
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 18.0;

/// Common HAR window length.
pub const DEFAULT_WINDOW_SECONDS: f64 = 2.56;

/// Default stride; gives 50%+ overlap at the default window length.
pub const DEFAULT_STRIDE_SECONDS: f64 = 0.50;

/// Default store location; `mode=rwc` creates the file on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://fallsense.db?mode=rwc";

/// Main configuration for the ETL pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Nominal sensor sample rate in Hz. Informational only; segmentation is
    /// purely time-based.
    pub sample_rate_hz: f64,

    /// Window length in seconds
    pub window_seconds: f64,

    /// Offset between consecutive window starts, in seconds
    pub stride_seconds: f64,

    /// Data-store connection string
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            window_seconds: DEFAULT_WINDOW_SECONDS,
            stride_seconds: DEFAULT_STRIDE_SECONDS,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Reject configurations that would make segmentation meaningless.
    ///
    /// Window and stride lengths must be positive and at least one
    /// millisecond; a non-positive stride would otherwise never advance.
    pub fn validate(&self) -> Result<()> {
        if !(self.window_seconds > 0.0) {
            return Err(Error::Config(format!(
                "window length must be positive, got {}",
                self.window_seconds
            )));
        }
        if !(self.stride_seconds > 0.0) {
            return Err(Error::Config(format!(
                "stride must be positive, got {}",
                self.stride_seconds
            )));
        }
        if self.window_length() <= Duration::zero() || self.stride() <= Duration::zero() {
            return Err(Error::Config(
                "window and stride must be at least one millisecond".to_string(),
            ));
        }
        Ok(())
    }

    /// Window length as a time duration (millisecond resolution).
    pub fn window_length(&self) -> Duration {
        Duration::milliseconds((self.window_seconds * 1000.0).round() as i64)
    }

    /// Stride as a time duration (millisecond resolution).
    pub fn stride(&self) -> Duration {
        Duration::milliseconds((self.stride_seconds * 1000.0).round() as i64)
    }
}
