use anyhow::Result;
use clap::Parser;
use medrxiv_harvest::collector::Collector;
use medrxiv_harvest::config::{find_config_file, HarvestConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// medRxiv Harvest - collect keyword-matched paper metadata with resumable output
#[derive(Parser, Debug)]
#[command(name = "medrxiv-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Harvest keyword-matched medRxiv paper metadata into a resumable JSON file", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page-source URL list file (one URL per line)
    #[arg(long)]
    urls: Option<PathBuf>,

    /// Title keyword (repeatable); replaces the configured keyword set
    #[arg(long = "keyword", short = 'k')]
    keywords: Vec<String>,

    /// Output file for matched records (also used for resumption)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Delay between page requests, in seconds
    #[arg(long)]
    delay: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("medrxiv_harvest={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let mut config = if let Some(config_path) = &cli.config {
        HarvestConfig::load(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        HarvestConfig::load(&config_path)?
    } else {
        HarvestConfig::default()
    };

    // CLI flags override file values
    if let Some(urls) = cli.urls {
        config.url_file = urls;
    }
    if !cli.keywords.is_empty() {
        config.keywords = cli.keywords;
    }
    if let Some(out) = cli.out {
        config.out_file = out;
    }
    if let Some(delay) = cli.delay {
        config.delay_secs = delay;
    }

    let collector = Collector::new(config)?;
    let summary = collector.run().await?;

    if !cli.quiet {
        println!(
            "Finished: {} pages ({} skipped), {} new records, {} total ({} unique DOIs)",
            summary.pages,
            summary.pages_skipped,
            summary.added,
            summary.total,
            summary.unique_dois
        );
    }

    Ok(())
}
