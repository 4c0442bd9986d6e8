//! CLI parse: clap types for the item inspector. No behavior; definitions only.

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::contracts::SeverityLevel;

/// Build one telemetry item and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "appinsights-item")]
#[command(about = "Build a telemetry item and print its envelope fields")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trace message
    Trace {
        message: String,
        /// verbose, information, warning, error, critical
        #[arg(long, default_value = "information")]
        severity: SeverityLevel,
    },
    /// Custom event
    Event { name: String },
    /// Single metric value
    Metric {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Handled request
    Request {
        name: String,
        /// Start instant in RFC 3339 (default: now)
        #[arg(long, value_parser = parse_start_time)]
        start: Option<DateTime<FixedOffset>>,
        /// Elapsed milliseconds
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        duration_ms: i64,
        #[arg(long, default_value = "200")]
        response_code: String,
        /// Mark the request as failed
        #[arg(long)]
        failed: bool,
    },
}

fn parse_start_time(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|e| format!("invalid RFC 3339 time: {}", e))
}
