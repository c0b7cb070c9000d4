//! Binary crate for the `weather-lookup` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and logging setup
//! - The interactive city prompt and startup lookup
//! - Drawing display state to the terminal

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod surface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    // Logs go to stderr so they never interleave with the result panel.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(cli::log_filter_from_verbosity(cmd.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run().await
}
