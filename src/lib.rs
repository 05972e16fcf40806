//! fallsense-etl - Windowing and feature-extraction ETL for fall-detection research.
//!
//! This library turns a raw, irregularly-batched stream of tri-axial
//! accelerometer/gyroscope samples into fixed-shape statistical feature
//! vectors for a downstream classifier. Per subject, the time series is cut
//! into overlapping fixed-length windows; each window with enough samples
//! yields a deterministic 67-value fingerprint and a majority-vote activity
//! label, persisted in one atomic batch.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        fallsense-etl                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────────┐   ┌─────────────────────┐  │
//! │  │  Ingest  │──▶│   Raw store   │──▶│      Pipeline       │  │
//! │  │  (CSV)   │   │   (SQLite)    │   │  group ▸ sort ▸ cut │  │
//! │  └──────────┘   └───────────────┘   └─────────────────────┘  │
//! │                                        │               │     │
//! │                                        ▼               ▼     │
//! │                                 ┌────────────┐  ┌──────────┐ │
//! │                                 │  Features  │  │  Labels  │ │
//! │                                 │ (67 stats) │  │ (majority│ │
//! │                                 └────────────┘  │   vote)  │ │
//! │                                        │        └──────────┘ │
//! │                                        ▼               │     │
//! │                                 ┌─────────────────────────┐  │
//! │                                 │ windows table (atomic)  │  │
//! │                                 └─────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use fallsense_etl::{config::Config, db, pipeline};
//!
//! # async fn demo() -> fallsense_etl::Result<()> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let pool = db::connect(&config.database_url).await?;
//! db::init_schema(&pool).await?;
//!
//! let created = pipeline::run(&pool, &config).await?;
//! println!("{created} windows");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod ingest;
pub mod pipeline;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use core::{extract_features, majority_label, segment, FeatureVector, Window};
pub use error::{Error, Result};
pub use ingest::{RawRecord, SensorSample};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
