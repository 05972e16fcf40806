//! fallsense CLI
//!
//! ETL entry points for the fall-detection feature pipeline.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use fallsense_etl::config::{
    Config, DEFAULT_DATABASE_URL, DEFAULT_SAMPLE_RATE_HZ, DEFAULT_STRIDE_SECONDS,
    DEFAULT_WINDOW_SECONDS,
};
use fallsense_etl::{db, ingest, pipeline, VERSION};

#[derive(Parser)]
#[command(name = "fallsense")]
#[command(version = VERSION)]
#[command(about = "Windowing and feature-extraction ETL for fall-detection research", long_about = None)]
struct Cli {
    /// Data-store connection string
    #[arg(long, env = "FALLSENSE_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// Nominal sensor sample rate in Hz (informational)
    #[arg(long, env = "FALLSENSE_SAMPLE_RATE_HZ", default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate_hz: f64,

    /// Window length in seconds
    #[arg(long, env = "FALLSENSE_WINDOW_SECONDS", default_value_t = DEFAULT_WINDOW_SECONDS)]
    window_seconds: f64,

    /// Offset between consecutive window starts, in seconds
    #[arg(long, env = "FALLSENSE_STRIDE_SECONDS", default_value_t = DEFAULT_STRIDE_SECONDS)]
    stride_seconds: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a raw sensor CSV into the store
    Load {
        /// Path to the CSV file
        csv: PathBuf,
    },

    /// Segment raw samples into windows and persist their feature vectors
    MakeWindows,

    /// Show store connectivity and row counts
    Status,

    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config {
        sample_rate_hz: cli.sample_rate_hz,
        window_seconds: cli.window_seconds,
        stride_seconds: cli.stride_seconds,
        database_url: cli.database_url.clone(),
    };
    config.validate()?;

    match cli.command {
        Commands::Load { csv } => cmd_load(&config, &csv).await,
        Commands::MakeWindows => cmd_make_windows(&config).await,
        Commands::Status => cmd_status(&config).await,
        Commands::Config => cmd_config(&config),
    }
}

async fn cmd_load(config: &Config, csv: &Path) -> Result<()> {
    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;

    let inserted = ingest::load_csv(&pool, csv).await?;
    println!("Inserted {} rows from {}", inserted, csv.display());
    Ok(())
}

async fn cmd_make_windows(config: &Config) -> Result<()> {
    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;

    let created = pipeline::run(&pool, config).await?;
    println!(
        "Created {} windows (win={}s, stride={}s, sample_rate≈{}Hz)",
        created, config.window_seconds, config.stride_seconds, config.sample_rate_hz
    );
    Ok(())
}

async fn cmd_status(config: &Config) -> Result<()> {
    let pool = db::connect(&config.database_url).await?;
    db::init_schema(&pool).await?;

    let raw = db::raw::count(&pool).await?;
    let missing = db::raw::null_timestamp_count(&pool).await?;
    let windows = db::windows::count(&pool).await?;

    println!("Store: {}", config.database_url);
    println!("  Raw samples: {raw} ({missing} without a valid timestamp)");
    println!("  Windows: {windows}");
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
