//! # Stow Demonstration Binary (stowd)
//!
//! Walks the fixed-capacity collection types and prints their fixed
//! demonstration output to stdout.
//!
//! This binary demonstrates:
//! - The append-only container with its capacity rejection and rendering
//! - Hash-based vs ordered set behavior over the same input data
//! - Hash-based vs ordered map behavior over the same student marks
//!
//! ## Usage
//!
//! ```bash
//! stowd [container|set|map|all] [--log-level <level>]
//! ```
//!
//! The demonstration output itself goes to stdout; diagnostics go through
//! `tracing`. Set `STOW_LOG_FORMAT` to `pretty` (default), `compact`, or
//! `json` to change the diagnostic format.

#![warn(missing_docs)]

mod demos;
mod level;

use std::env;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

use crate::level::LogLevel;

/// Stow demonstration CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Demonstration to run: container, set, map, or all
    #[arg(default_value = "all")]
    demo: String,

    /// Log level for diagnostic output (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    let level = LogLevel::from_string_or_default(&args.log_level);
    initialize_tracing(level);

    // Setup timings for performance measurement
    let start_time = Instant::now();

    info!("Running demonstration: {}", args.demo);
    let output = match args.demo.as_str() {
        "container" => demos::container_demo()?,
        "set" => demos::set_demo()?,
        "map" => demos::map_demo()?,
        "all" => demos::all_demos()?,
        other => {
            error!("Unknown demonstration: {}", other);
            return Err(stow_error::helpers::unknown_demo(
                "demonstration must be one of: container, set, map, all",
            )
            .into());
        }
    };

    print!("{output}");

    debug!(
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "demonstrations complete"
    );

    Ok(())
}

/// Initialize the tracing system for logging
fn initialize_tracing(level: LogLevel) {
    let format = env::var("STOW_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.as_tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}
