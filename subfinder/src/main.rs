use anyhow::Result;
use args::Args;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod args;
mod cli;
mod config;
mod dns;
mod error;
mod http;
mod models;
mod output;
mod prober;
mod report;
mod scheduler;
mod wordlist;
use clap::Parser;
pub use error::Error;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    cli::scan(&args)?;

    Ok(())
}
