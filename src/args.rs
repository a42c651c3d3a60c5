use clap::Parser;
use std::path::PathBuf;

use crate::config::STREAM_RATE_PER_HOUR_USD;

#[derive(Parser, Debug)]
#[command(
    name = "monetree",
    about = "Summarize Web Monetization streaming time and estimated payments per website",
    version,
    long_about = None
)]
pub struct Args {
    /// Snapshot database exported by the extension's data layer
    #[arg(short, long, default_value = "monetree.db")]
    pub database: PathBuf,

    /// Number of origins with the most monetized time to display
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// Number of origins that need some love to display
    #[arg(short, long, default_value_t = 5)]
    pub love: usize,

    /// Only estimate the payment for this origin
    #[arg(short, long)]
    pub origin: Option<String>,

    /// Streaming rate in USD per hour used for payment estimates
    #[arg(long, default_value_t = STREAM_RATE_PER_HOUR_USD)]
    pub rate_per_hour: f64,

    /// Redact origins for privacy
    #[arg(long)]
    pub redact: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
